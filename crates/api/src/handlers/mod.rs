pub mod agents;
pub mod calls;
pub mod campaigns;
pub mod dashboard;
pub mod functions;
pub mod leads;
pub mod settings;
