mod password_tests;
