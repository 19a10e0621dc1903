use school_manager::error::AppError;
use school_manager::identity::IdentityProvider;
use school_manager::model::auth::{LoginRequest, RegisterRequest};
use school_manager::model::parent::Parent;
use school_manager::model::user::{User, UserRole};
use school_manager::service::auth::AuthService;
use test_utils::builder::TestBuilder;
use test_utils::factory::parent::ParentFactory;
use test_utils::factory::user::UserFactory;

mod get_user_by_email;
mod login;
mod update_password;
