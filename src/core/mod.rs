// ─── jfxlaunch Core ───
// Turns declarative build facts into the argument vector of a Java launch.
//
// Architecture:
//   core/
//     module/  - Module descriptors, path elements, module filter
//     launch/  - Tokenizer, path-mode and module-set resolvers, composer
//     config/  - JSON launch configuration
//
// Spawning the JVM, locating `java` and probing its version live outside
// this crate; their results arrive through `LaunchConfig`.

pub mod config;
pub mod error;
pub mod launch;
pub mod module;
