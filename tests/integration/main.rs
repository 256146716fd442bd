mod support;
mod test_follow_up;
