macro_rules! register_collectors {
    (
        $(
            $module:ident => $collector_type:ident
        ),* $(,)?
    ) => {
        // Import all collector modules
        $(
            pub mod $module;
            pub use $module::$collector_type;
        )*

        // Generate the enum with all collector types
        #[derive(Clone)]
        pub enum CollectorType {
            $(
                $collector_type($collector_type),
            )*
        }

        // Implement Collector trait for CollectorType enum
        impl Collector for CollectorType {
            fn name(&self) -> &'static str {
                match self {
                    $(
                        CollectorType::$collector_type(c) => c.name(),
                    )*
                }
            }

            fn fetch(&self) -> BoxFuture<'_, Result<Event>> {
                match self {
                    $(
                        CollectorType::$collector_type(c) => c.fetch(),
                    )*
                }
            }

            fn enabled_by_default(&self) -> bool {
                match self {
                    $(
                        CollectorType::$collector_type(c) => c.enabled_by_default(),
                    )*
                }
            }
        }

        /// Whether the named collector is on when neither CLI toggle is
        /// passed. Unknown names are off.
        #[must_use]
        pub fn enabled_by_default(name: &str) -> bool {
            $(
                if name == stringify!($module) {
                    return $collector_type::ENABLED_BY_DEFAULT;
                }
            )*
            false
        }

        // Generate the factory function map. The application composes its
        // collector set from this table explicitly; nothing registers itself
        // at startup.
        #[must_use]
        pub fn all_factories() -> HashMap<&'static str, fn(&CollectorSettings) -> CollectorType> {
            let mut map: HashMap<&'static str, fn(&CollectorSettings) -> CollectorType> =
                HashMap::new();
            $(
                map.insert(
                    stringify!($module),
                    |settings| CollectorType::$collector_type($collector_type::new(settings)),
                );
            )*
            map
        }

        // Generate array of collector names
        pub const COLLECTOR_NAMES: &[&'static str] = &[
            $(stringify!($module),)*
        ];
    };
}
