mod parser_property_tests;
mod pipeline_examples;
