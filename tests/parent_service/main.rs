use school_manager::error::AppError;
use school_manager::model::document::{DocumentRequest, DocumentType, RequestStatus};
use school_manager::model::parent::Parent;
use school_manager::service::parent::ParentService;
use school_manager::util::timestamp::Timestamp;
use test_utils::builder::TestBuilder;
use test_utils::factory::create_parent;
use test_utils::factory::parent::ParentFactory;

mod crud;
mod link_child;
mod submit_document_request;
