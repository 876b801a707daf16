mod test_constants;
mod test_key_schedule;
mod test_mixing;
mod test_properties;
