pub mod fieldmetadata;
pub mod graphql;
pub mod objectmetadata;
pub(crate) mod parse;
pub mod selectoption;
pub mod serviceclient;
pub mod workflow;
pub mod workspacemember;
