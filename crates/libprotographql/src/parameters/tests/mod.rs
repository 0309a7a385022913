mod parameters_tests;
