//! Request and response models for the users API.

pub mod requests;
pub mod responses;

pub use requests::CreateUserRequest;
pub use responses::UserProfileResponse;
