use school_manager::error::AppError;
use school_manager::model::payment::{Payment, PaymentStatus};
use school_manager::service::payment::PaymentService;
use school_manager::util::timestamp::Timestamp;
use test_utils::builder::TestBuilder;
use test_utils::factory::create_payment;
use test_utils::factory::payment::PaymentFactory;

mod delete;
mod find;
mod has_paid;
mod status;
mod update;
