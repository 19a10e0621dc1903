use school_manager::error::AppError;
use school_manager::model::announcement::{Announcement, AnnouncementType};
use school_manager::model::document::RequestStatus;
use school_manager::service::admin::AdminService;
use school_manager::util::timestamp::Timestamp;
use test_utils::builder::TestBuilder;
use test_utils::factory::document_request::DocumentRequestFactory;
use test_utils::factory::{create_announcement, create_document_request};

mod announcements;
mod document_requests;
