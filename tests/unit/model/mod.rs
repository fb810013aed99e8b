mod test_requests;
mod test_validation;
