mod query_facade_tests;
