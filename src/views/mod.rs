mod feature;
pub use feature::*;

mod home;
pub use home::*;

mod shell;
pub use shell::*;

mod workspace;
pub use workspace::*;
