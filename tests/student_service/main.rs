use school_manager::error::AppError;
use school_manager::model::student::{Student, StudentStatus};
use school_manager::service::student::StudentService;
use school_manager::util::timestamp::Timestamp;
use test_utils::builder::TestBuilder;
use test_utils::factory::create_student;
use test_utils::factory::helpers::create_family;
use test_utils::factory::student::StudentFactory;

mod approve;
mod delete;
mod update;
