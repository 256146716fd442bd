mod test_cli_interface;
mod test_report_schema;
