use school_manager::error::AppError;
use school_manager::model::meeting::{
    Meeting, MeetingStatus, MeetingType, OneOnOneMeetingRequest,
};
use school_manager::service::meeting::MeetingService;
use school_manager::util::timestamp::Timestamp;
use test_utils::builder::TestBuilder;
use test_utils::factory::create_meeting;
use test_utils::factory::meeting::MeetingFactory;

mod approve;
mod delete;
mod find;
mod update;
