pub mod analysis_transport;
