use quill_core::QuillResult;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
}

impl CheckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail => "fail",
            CheckStatus::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TechnicalCheck {
    pub name: String,
    pub status: CheckStatus,
    pub description: String,
}

/// Technical SEO checks against a live site: crawler files reachable and
/// HTTPS in use. Network failures downgrade to a failed check, never an
/// error for the caller.
pub async fn technical_checks(base_url: &str) -> QuillResult<Vec<TechnicalCheck>> {
    let base = base_url.trim_end_matches('/');
    let client = reqwest::Client::builder()
        .user_agent("quill/0.1")
        .timeout(std::time::Duration::from_secs(5))
        .build()?;

    let mut checks = Vec::new();
    checks.push(fetch_check(&client, "Robots.txt", &format!("{}/robots.txt", base)).await);
    checks.push(fetch_check(&client, "XML Sitemap", &format!("{}/sitemap.xml", base)).await);

    let is_https = Url::parse(base_url)
        .map(|u| u.scheme() == "https")
        .unwrap_or(false);
    checks.push(TechnicalCheck {
        name: "HTTPS".to_string(),
        status: if is_https {
            CheckStatus::Pass
        } else {
            CheckStatus::Warning
        },
        description: if is_https {
            "Site is using HTTPS".to_string()
        } else {
            "Site should use HTTPS for better security and SEO".to_string()
        },
    });

    Ok(checks)
}

async fn fetch_check(client: &reqwest::Client, name: &str, url: &str) -> TechnicalCheck {
    match client.get(url).send().await {
        Ok(resp) if resp.status().is_success() => TechnicalCheck {
            name: name.to_string(),
            status: CheckStatus::Pass,
            description: format!("{} is accessible", name),
        },
        Ok(resp) => TechnicalCheck {
            name: name.to_string(),
            status: CheckStatus::Fail,
            description: format!("{} returned HTTP {}", name, resp.status().as_u16()),
        },
        Err(_) => TechnicalCheck {
            name: name.to_string(),
            status: CheckStatus::Fail,
            description: format!("Unable to access {}", name),
        },
    }
}
