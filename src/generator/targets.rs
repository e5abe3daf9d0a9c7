//! Build-rule enumeration.
//!
//! Every target gets one `add_custom_target` per enumerated configuration
//! plus a default rule that also carries the file lists, so the IDE
//! associates the sources with something buildable.

use serde::Serialize;

use crate::core::roots::GAME_PROJECT_FILE_TOKEN;
use crate::core::{Configuration, GeneratedProject};
use crate::generator::context::GeneratorContext;
use crate::generator::errors::GenerateError;

/// One `add_custom_target` invocation of the build driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildRule {
    /// Bare target name
    pub target: String,

    /// Host architecture label
    pub architecture: String,

    pub configuration: Configuration,

    /// `-project=...` argument for targets of the game project
    pub project_arg: Option<String>,

    /// Whether this is the default rule listing the file groups
    pub is_default: bool,
}

impl BuildRule {
    /// Name of the CMake target.
    pub fn name(&self) -> String {
        if self.is_default {
            self.target.clone()
        } else {
            format!(
                "{}-{}-{}",
                self.target, self.architecture, self.configuration
            )
        }
    }

    /// Render the rule as a descriptor line.
    pub fn render(&self) -> String {
        let project_arg = self.project_arg.as_deref().unwrap_or("");

        if self.is_default {
            format!(
                "add_custom_target({} ${{BUILD}} {} {} {} {} $(ARGS) SOURCES ${{SOURCE_FILES}} ${{HEADER_FILES}} ${{CONFIG_FILES}})\n\n",
                self.name(),
                self.target,
                self.architecture,
                self.configuration,
                project_arg
            )
        } else {
            format!(
                "add_custom_target({} ${{BUILD}} {} {} {} {} $(ARGS))\n",
                self.name(),
                self.target,
                self.architecture,
                self.configuration,
                project_arg
            )
        }
    }
}

/// `-project=` argument for `target_name`, if it builds the game project.
fn project_arg(target_name: &str, ctx: &GeneratorContext) -> Option<String> {
    ctx.roots()
        .game()
        .filter(|game| game.owns_target(target_name))
        .map(|_| format!("-project=\"{}\"", GAME_PROJECT_FILE_TOKEN))
}

/// Enumerate the build rules of every project target.
///
/// Projects are visited in generation order, targets in listed order and
/// configurations in declaration order. Targets without a rules file are
/// skipped.
pub fn enumerate(
    projects: &[GeneratedProject],
    ctx: &GeneratorContext,
) -> Result<Vec<BuildRule>, GenerateError> {
    let architecture = ctx.host_architecture()?;
    let mut rules = Vec::new();

    for project in projects {
        for target in &project.targets {
            let Some(name) = target.name() else {
                tracing::trace!("skipping target without a rules file in {}", project.path.display());
                continue;
            };

            let project_arg = project_arg(name, ctx);

            for configuration in Configuration::ALL {
                if !configuration.is_enumerated() || !ctx.is_valid_configuration(configuration) {
                    continue;
                }

                rules.push(BuildRule {
                    target: name.to_string(),
                    architecture: architecture.to_string(),
                    configuration,
                    project_arg: project_arg.clone(),
                    is_default: false,
                });
            }

            rules.push(BuildRule {
                target: name.to_string(),
                architecture: architecture.to_string(),
                configuration: Configuration::DEFAULT,
                project_arg,
                is_default: true,
            });
        }
    }

    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameProject, HostPlatform, ProjectTarget, RootContext};

    fn game_ctx() -> GeneratorContext {
        let game = GameProject::from_project_file("/work/Shooter/Shooter.uproject").unwrap();
        GeneratorContext::new(RootContext::new("/ue").with_game(game), HostPlatform::Linux)
    }

    fn project(targets: &[&str]) -> GeneratedProject {
        targets.iter().fold(
            GeneratedProject::new("/ue/Engine/Intermediate/ProjectFiles/UE4.vcxproj"),
            |p, t| p.target(ProjectTarget::new(*t)),
        )
    }

    #[test]
    fn test_rules_per_configuration_then_default() {
        let rules = enumerate(&[project(&["/ue/Engine/Source/Game.Target.cs"])], &game_ctx()).unwrap();
        let names: Vec<_> = rules.iter().map(BuildRule::name).collect();

        assert_eq!(
            names,
            vec![
                "Game-Linux-Debug",
                "Game-Linux-DebugGame",
                "Game-Linux-Shipping",
                "Game-Linux-Test",
                "Game",
            ]
        );
        assert!(rules.last().unwrap().is_default);
        assert_eq!(rules.last().unwrap().configuration, Configuration::Development);
    }

    #[test]
    fn test_rendered_lines() {
        let rules = enumerate(&[project(&["/ue/Engine/Source/Game.Target.cs"])], &game_ctx()).unwrap();

        assert_eq!(
            rules[0].render(),
            "add_custom_target(Game-Linux-Debug ${BUILD} Game Linux Debug  $(ARGS))\n"
        );
        assert_eq!(
            rules[4].render(),
            "add_custom_target(Game ${BUILD} Game Linux Development  $(ARGS) SOURCES ${SOURCE_FILES} ${HEADER_FILES} ${CONFIG_FILES})\n\n"
        );
    }

    #[test]
    fn test_project_argument_only_for_game_targets() {
        let projects = [project(&[
            "/work/Shooter/Source/Shooter.Target.cs",
            "/ue/Engine/Source/UE4Editor.Target.cs",
            "/work/Shooter/Source/ShooterEditor.Target.cs",
        ])];
        let rules = enumerate(&projects, &game_ctx()).unwrap();

        for rule in &rules {
            let expected = rule.target == "Shooter" || rule.target == "ShooterEditor";
            assert_eq!(rule.project_arg.is_some(), expected, "{}", rule.name());
        }

        let shooter = rules.iter().find(|r| r.name() == "Shooter-Linux-Debug").unwrap();
        assert_eq!(
            shooter.render(),
            "add_custom_target(Shooter-Linux-Debug ${BUILD} Shooter Linux Debug -project=\"${GAME_PROJECT_FILE}\" $(ARGS))\n"
        );
    }

    #[test]
    fn test_no_project_argument_without_game() {
        let ctx = GeneratorContext::new(RootContext::new("/ue"), HostPlatform::Mac);
        let rules = enumerate(&[project(&["/ue/Engine/Source/Editor.Target.cs"])], &ctx).unwrap();
        assert!(rules.iter().all(|r| r.project_arg.is_none()));
        assert_eq!(rules[0].name(), "Editor-Mac-Debug");
    }

    #[test]
    fn test_targets_without_path_are_skipped() {
        let projects = [project(&["/ue/Engine/Source/Game.Target.cs"]).target(ProjectTarget::default())];
        let rules = enumerate(&projects, &game_ctx()).unwrap();
        assert_eq!(rules.len(), 5);
    }

    #[test]
    fn test_invalid_configurations_are_skipped() {
        let ctx = game_ctx().with_configurations(vec![Configuration::Debug, Configuration::Development]);
        let rules = enumerate(&[project(&["/ue/Engine/Source/Game.Target.cs"])], &ctx).unwrap();
        let names: Vec<_> = rules.iter().map(BuildRule::name).collect();
        assert_eq!(names, vec!["Game-Linux-Debug", "Game"]);
    }

    #[test]
    fn test_unsupported_platform_fails() {
        let ctx = GeneratorContext::new(RootContext::new("/ue"), HostPlatform::Win32);
        assert!(enumerate(&[], &ctx).is_err());
    }
}
