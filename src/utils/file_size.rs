pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Humanizes a byte count the way the file list displays it:
    /// above 1 MiB in MB, above 1 KiB in KB, otherwise raw bytes.
    pub fn format_size(size: u64) -> String {
        const KIB: u64 = 1024;
        const MIB: u64 = 1024 * 1024;

        if size > MIB {
            format!("{:.1} MB", size as f64 / MIB as f64)
        } else if size > KIB {
            format!("{:.1} KB", size as f64 / KIB as f64)
        } else {
            format!("{} bytes", size)
        }
    }
}
