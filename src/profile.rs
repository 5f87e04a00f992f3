/// Represents one Git identity profile stored in the profiles file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Unique profile key
    pub key: String,
    /// Git display name (user.name)
    pub name: String,
    /// Git email address (user.email)
    pub email: String,
}

impl Profile {
    pub fn new(key: &str, name: &str, email: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// Finds a profile by key in a first-seen-order list
pub fn find<'a>(profiles: &'a [Profile], key: &str) -> Option<&'a Profile> {
    profiles.iter().find(|profile| profile.key == key)
}

/// Inserts a profile, overwriting in place when the key already exists
/// so that the on-disk block keeps its position
pub fn upsert(profiles: &mut Vec<Profile>, profile: Profile) {
    match profiles.iter_mut().find(|existing| existing.key == profile.key) {
        Some(existing) => *existing = profile,
        None => profiles.push(profile),
    }
}
