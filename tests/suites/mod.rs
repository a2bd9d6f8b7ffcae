mod job_protocol;
mod support;
mod validation_property;
