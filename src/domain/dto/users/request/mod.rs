pub mod register_request;
pub mod auth_request;
pub mod profile_request;

pub use register_request::RegisterRequest;
pub use auth_request::LoginRequest;
pub use profile_request::{
    UpdateAvatarRequest, UpdateBasicInfoRequest, UpdateProfileRequest, UpdateRoleRequest,
};
