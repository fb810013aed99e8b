mod application;
mod model;
mod test_error;
