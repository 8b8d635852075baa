//! Rule registry — maps selected standards to rule packs.

use codegate_core::{ComplianceOptions, Standard};

use super::baseline::{ExplicitReturnTypes, NoEmptyBlocks};
use super::nestjs::{ControllerDecorator, InjectableDecorator, ModuleStructure};
use super::prisma::SchemaValidation;
use super::ComplianceRule;

/// Build the rule list for a configuration. Registration order is fixed:
/// baseline first, then packs in the order standards were requested.
pub fn rules_for(options: &ComplianceOptions) -> Vec<Box<dyn ComplianceRule>> {
    let mut rules: Vec<Box<dyn ComplianceRule>> =
        vec![Box::new(NoEmptyBlocks), Box::new(ExplicitReturnTypes)];

    for standard in &options.standards {
        match standard {
            Standard::NestJs => {
                rules.push(Box::new(InjectableDecorator));
                rules.push(Box::new(ControllerDecorator));
                rules.push(Box::new(ModuleStructure));
            }
            Standard::Prisma => {
                rules.push(Box::new(SchemaValidation));
            }
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_rules_always_register() {
        let rules = rules_for(&ComplianceOptions::default());
        let ids: Vec<_> = rules.iter().map(|r| r.id()).collect();
        assert!(ids.contains(&"no-empty-blocks"));
        assert!(ids.contains(&"explicit-return-types"));
    }

    #[test]
    fn packs_register_per_standard() {
        let options = ComplianceOptions {
            standards: vec![Standard::NestJs, Standard::Prisma],
            ..Default::default()
        };
        let ids: Vec<_> = rules_for(&options).iter().map(|r| r.id()).collect();
        assert!(ids.contains(&"nestjs-module-structure"));
        assert!(ids.contains(&"prisma-schema-validation"));
    }

    #[test]
    fn unselected_packs_stay_out() {
        let ids: Vec<_> = rules_for(&ComplianceOptions::default())
            .iter()
            .map(|r| r.id())
            .collect();
        assert!(!ids.iter().any(|id| id.starts_with("nestjs-")));
        assert!(!ids.contains(&"prisma-schema-validation"));
    }
}
