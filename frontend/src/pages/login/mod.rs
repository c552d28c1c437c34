pub mod repository;
pub mod utils;

pub use repository::LoginRepository;
