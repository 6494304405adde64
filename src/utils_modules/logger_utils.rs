use crate::common::*;

#[doc = "Initializes the global logger: daily rotated files under ./logs, duplicated to stdout."]
pub fn set_global_logger() {
    Logger::try_with_str("info")
        .unwrap()
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .expect("Failed to initialize logger");
}
