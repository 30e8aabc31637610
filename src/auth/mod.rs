pub mod credentials;

pub use credentials::{Connection, Credentials};
