use school_manager::error::AppError;
use school_manager::model::document::{Document, DocumentType};
use school_manager::service::document::DocumentService;
use school_manager::util::timestamp::Timestamp;
use test_utils::builder::TestBuilder;
use test_utils::factory::create_document;
use test_utils::factory::document::DocumentFactory;

mod find;
