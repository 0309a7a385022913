mod request_handler_tests;
