mod health;
mod zip_code;

pub use health::health_handler;
pub use zip_code::{
    count_handler, create_handler, delete_all_handler, find_handler, list_handler,
};
