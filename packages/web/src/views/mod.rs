mod browse;
mod login;

pub use browse::Browse;
pub use login::Login;
