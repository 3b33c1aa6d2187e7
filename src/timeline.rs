pub mod assemble;
pub mod compositor;
pub mod outro;
pub mod visual;
