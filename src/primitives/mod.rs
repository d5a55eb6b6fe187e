mod min_w0_wrapper;
pub use min_w0_wrapper::*;
