ternary_test_macros::test_connectives!("test-data/connectives");
