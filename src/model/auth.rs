use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub auth_token: String,
}

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct SetPasswordDto {
    pub current_password: String,
    pub new_password: String,
}
