pub mod issue_logger;
