//! Templates compiled into the binary.

use tracing::debug;

use blueprint_core::{
    application::ports::TemplateSource, domain::TemplateFile, error::BlueprintResult,
};

const SERVICE_TS: &str = "\
import { Injectable } from '@angular/core';

@Injectable()
export class {{CLASSIFIED_MODULE_NAME}}Service {

  constructor() { }

}
";

const SERVICE_SPEC_TS: &str = "\
import { TestBed, inject } from '@angular/core/testing';

import { {{CLASSIFIED_MODULE_NAME}}Service } from './{{DASHERIZED_MODULE_NAME}}.service';

describe('{{CLASSIFIED_MODULE_NAME}}Service', () => {
  beforeEach(() => {
    TestBed.configureTestingModule({
      providers: [{{CLASSIFIED_MODULE_NAME}}Service]
    });
  });

  it('should be created', inject([{{CLASSIFIED_MODULE_NAME}}Service], (service: {{CLASSIFIED_MODULE_NAME}}Service) => {
    expect(service).toBeTruthy();
  }));
});
";

/// (blueprint, tokenised path, content)
const BUILTIN: &[(&str, &str, &str)] = &[
    ("service", "__path__/__name__.service.ts", SERVICE_TS),
    ("service", "__path__/__name__.service.spec.ts", SERVICE_SPEC_TS),
];

/// The default template set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for BuiltinTemplates {
    fn files(&self, blueprint: &str) -> BlueprintResult<Vec<TemplateFile>> {
        let files: Vec<_> = BUILTIN
            .iter()
            .filter(|(name, _, _)| *name == blueprint)
            .map(|(_, path, content)| TemplateFile::new(*path, *content))
            .collect();
        debug!(blueprint, count = files.len(), "Built-in templates");
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::domain::RenderContext;

    #[test]
    fn service_has_class_and_spec() {
        let files = BuiltinTemplates.files("service").unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.path == "__path__/__name__.service.spec.ts"));
    }

    #[test]
    fn unknown_blueprint_has_no_files() {
        assert!(BuiltinTemplates.files("pipe").unwrap().is_empty());
    }

    #[test]
    fn service_renders_class_name() {
        let ctx = RenderContext::new("userProfile");
        let out = ctx.render(SERVICE_TS);
        assert!(out.contains("export class UserProfileService {"));

        let spec = ctx.render(SERVICE_SPEC_TS);
        assert!(spec.contains("from './user-profile.service';"));
        assert!(spec.contains("providers: [UserProfileService]"));
    }
}
