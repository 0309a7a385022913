mod field_type_tests;
