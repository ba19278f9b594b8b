//! Well-known templates and the artifacts rendered from them.

use std::path::PathBuf;

use super::ProjectLayout;

/// One of the five user-editable templates under `.wpdev/templates/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    Compose,
    Nginx,
    PhpDockerfile,
    CaddyHttp,
    CaddyMkcert,
}

impl TemplateName {
    pub const ALL: [TemplateName; 5] = [
        TemplateName::Compose,
        TemplateName::Nginx,
        TemplateName::PhpDockerfile,
        TemplateName::CaddyMkcert,
        TemplateName::CaddyHttp,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateName::Compose => "docker-compose.tmpl.yml",
            TemplateName::Nginx => "nginx.conf.tmpl",
            TemplateName::PhpDockerfile => "php.Dockerfile.tmpl",
            TemplateName::CaddyHttp => "Caddyfile.http.tmpl",
            TemplateName::CaddyMkcert => "Caddyfile.mkcert.tmpl",
        }
    }
}

/// A generated file owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    WebConfig,
    ImageRecipe,
    Orchestration,
    Proxy,
}

impl Artifact {
    /// Render order.
    pub const ALL: [Artifact; 4] =
        [Artifact::WebConfig, Artifact::ImageRecipe, Artifact::Orchestration, Artifact::Proxy];

    /// Template that produces this artifact. Only the proxy depends on TLS.
    pub fn template(&self, tls_enabled: bool) -> TemplateName {
        match self {
            Artifact::WebConfig => TemplateName::Nginx,
            Artifact::ImageRecipe => TemplateName::PhpDockerfile,
            Artifact::Orchestration => TemplateName::Compose,
            Artifact::Proxy if tls_enabled => TemplateName::CaddyMkcert,
            Artifact::Proxy => TemplateName::CaddyHttp,
        }
    }

    pub fn output_path(&self, layout: &ProjectLayout) -> PathBuf {
        match self {
            Artifact::WebConfig => layout.generated_dir().join("nginx.conf"),
            Artifact::ImageRecipe => layout.generated_dir().join("php.Dockerfile"),
            Artifact::Orchestration => layout.compose_file(),
            Artifact::Proxy => layout.generated_dir().join("Caddyfile"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_is_the_only_tls_dependent_artifact() {
        for artifact in Artifact::ALL {
            let changed = artifact.template(true) != artifact.template(false);
            assert_eq!(changed, artifact == Artifact::Proxy, "{artifact:?}");
        }
        assert_eq!(Artifact::Proxy.template(true), TemplateName::CaddyMkcert);
        assert_eq!(Artifact::Proxy.template(false), TemplateName::CaddyHttp);
    }

    #[test]
    fn orchestration_file_lands_at_project_root() {
        let layout = ProjectLayout::new("/srv/shop");
        assert_eq!(
            Artifact::Orchestration.output_path(&layout),
            PathBuf::from("/srv/shop/docker-compose.yml")
        );
        assert_eq!(
            Artifact::Proxy.output_path(&layout),
            PathBuf::from("/srv/shop/.wpdev/generated/Caddyfile")
        );
    }
}
