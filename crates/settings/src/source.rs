//! Sources that can populate a settings store.

/// A collaborator that supplies settings entries.
///
/// Sources cannot fail: a real external client would need its own error type,
/// which is out of scope here.
pub trait SettingsSource {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Entries this source provides for `identifier`, in insertion order.
    fn fetch(&self, identifier: &str) -> Vec<(String, String)>;
}

/// Built-in application defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct Defaults;

impl Defaults {
    pub const ENTRIES: [(&'static str, &'static str); 6] = [
        ("app.name", "MyApplication"),
        ("app.version", "1.0.0"),
        ("app.theme", "light"),
        ("app.language", "kk"),
        ("max.users", "100"),
        ("timeout", "30"),
    ];
}

impl SettingsSource for Defaults {
    fn name(&self) -> &'static str {
        "defaults"
    }

    fn fetch(&self, _identifier: &str) -> Vec<(String, String)> {
        owned(&Self::ENTRIES)
    }
}

/// Stand-in for a database: ignores the connection descriptor and returns a
/// fixed set of connection keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct DatabaseStub;

impl DatabaseStub {
    pub const ENTRIES: [(&'static str, &'static str); 4] = [
        ("db.host", "localhost"),
        ("db.port", "5432"),
        ("db.name", "mydb"),
        ("db.user", "admin"),
    ];
}

impl SettingsSource for DatabaseStub {
    fn name(&self) -> &'static str {
        "database"
    }

    fn fetch(&self, _identifier: &str) -> Vec<(String, String)> {
        owned(&Self::ENTRIES)
    }
}

fn owned(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
