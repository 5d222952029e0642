#[allow(unused_macros)]
macro_rules! assert_error {
    ($res:expr, $pattern:pat) => {{
        match $res {
            Err(error) => {
                assert!(
                    matches!(error, $pattern),
                    "unexpected error: {error:?} ({})",
                    error.code()
                );
            }
            Ok(value) => panic!("expected an error, got {value:?}"),
        }
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_error;

#[allow(unused_macros)]
macro_rules! enable_logging {
    ($level:ident) => {{
        use ::tracing::level_filters::LevelFilter;
        use ::tracing_subscriber::{
            layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
        };

        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::$level.into())
            .from_env_lossy();

        ::tracing_subscriber::registry()
            .with(
                ::tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()
            .ok();
    }};
}

#[allow(unused_imports)]
pub(crate) use enable_logging;
