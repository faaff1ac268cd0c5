//! Shorthand macros over [`TestBuilder`](crate::TestBuilder).

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

#[macro_export]
macro_rules! test_setup_with_user_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestBuilder::new().with_user_tables().build().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            .with_user_tables()
            $(.with_table($entity))+
            .build()
            .await
    }};
}
