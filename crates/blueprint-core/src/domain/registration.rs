//! What gets written into a host module to register a generated service.

use std::path::Path;

use crate::domain::{
    entities::common::relative_between,
    naming::{classify, dasherize},
};

/// Import path, class name and registration symbol for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDescriptor {
    /// Exported class, e.g. `UserProfileService`.
    pub class_name: String,
    /// File name without extension, e.g. `user-profile.service`.
    pub file_name: String,
    /// Module specifier relative to the host file, e.g. `./user-profile/user-profile.service`.
    pub import_path: String,
}

impl ImportDescriptor {
    /// Describe the import of service `entity_name` placed in `placement_dir`
    /// from a host module living in `host_dir`. Both directories are absolute.
    pub fn for_service(entity_name: &str, host_dir: &Path, placement_dir: &Path) -> Self {
        let class_name = classify(&format!("{entity_name}Service"));
        let file_name = dasherize(&format!("{entity_name}.service"));
        let relative = relative_between(host_dir, placement_dir);

        let import_path = if relative.is_empty() {
            format!("./{file_name}")
        } else {
            format!("./{relative}/{file_name}")
        };

        Self {
            class_name,
            file_name,
            import_path,
        }
    }

    /// Symbol inserted into the registration list.
    pub fn symbol(&self) -> &str {
        &self.class_name
    }

    /// The import statement added to the host module.
    pub fn import_statement(&self) -> String {
        format!(
            "import {{ {} }} from '{}';",
            self.class_name, self.import_path
        )
    }
}
