use super::*;

#[test]
fn parse_args_requires_subcommand() -> AppResult<()> {
    match ProbeArgs::try_parse_from(["apiprobe"]) {
        Ok(_) => Err(AppError::validation("Expected missing subcommand to fail")),
        Err(_) => Ok(()),
    }
}

#[test]
fn parse_args_rejects_unknown_subcommand() -> AppResult<()> {
    match ProbeArgs::try_parse_from(["apiprobe", "ping", "--url", "http://localhost"]) {
        Ok(_) => Err(AppError::validation("Expected unknown subcommand to fail")),
        Err(_) => Ok(()),
    }
}

#[test]
fn parse_args_check_version() -> AppResult<()> {
    let args = ProbeArgs::try_parse_from([
        "apiprobe",
        "check-version",
        "--url",
        "http://localhost",
        "--apiversion",
        "1.2.0",
    ])?;
    match args.command {
        Command::CheckVersion(version) => {
            if version.url != "http://localhost" {
                return Err(AppError::validation("Unexpected check-version url"));
            }
            if version.api_version != "1.2.0" {
                return Err(AppError::validation("Unexpected api version"));
            }
            Ok(())
        }
        _ => Err(AppError::validation("Expected check-version subcommand")),
    }
}

#[test]
fn parse_args_check_version_requires_apiversion() -> AppResult<()> {
    match ProbeArgs::try_parse_from(["apiprobe", "check-version", "--url", "http://localhost"]) {
        Ok(_) => Err(AppError::validation("Expected missing --apiversion to fail")),
        Err(_) => Ok(()),
    }
}

#[test]
fn parse_args_batch_request_collects_urls() -> AppResult<()> {
    let args = ProbeArgs::try_parse_from([
        "apiprobe",
        "batch-request",
        "--url",
        "http://a.test/ok",
        "http://b.test/ok",
        "--url",
        "http://c.test/ok",
        "--apiversion",
        "2",
    ])?;
    match args.command {
        Command::BatchRequest(batch) => {
            if batch.url.len() != 3 {
                return Err(AppError::validation(format!(
                    "Expected 3 urls, got {}",
                    batch.url.len()
                )));
            }
            if batch.api_version.as_deref() != Some("2") {
                return Err(AppError::validation("Unexpected api version"));
            }
            Ok(())
        }
        _ => Err(AppError::validation("Expected batch-request subcommand")),
    }
}

#[test]
fn parse_args_batch_request_requires_url() -> AppResult<()> {
    match ProbeArgs::try_parse_from(["apiprobe", "batch-request"]) {
        Ok(_) => Err(AppError::validation("Expected missing --url to fail")),
        Err(_) => Ok(()),
    }
}

#[test]
fn parse_args_load_test_accepts_positional_urls() -> AppResult<()> {
    let args = ProbeArgs::try_parse_from([
        "apiprobe",
        "load-test",
        "http://a.test",
        "http://b.test",
    ])?;
    match args.command {
        Command::LoadTest(load) => {
            if load.targets() != ["http://a.test", "http://b.test"] {
                return Err(AppError::validation("Unexpected load-test targets"));
            }
            Ok(())
        }
        _ => Err(AppError::validation("Expected load-test subcommand")),
    }
}

#[test]
fn parse_args_load_test_requires_targets() -> AppResult<()> {
    match ProbeArgs::try_parse_from(["apiprobe", "load-test"]) {
        Ok(_) => Err(AppError::validation("Expected load-test without urls to fail")),
        Err(_) => Ok(()),
    }
}

#[test]
fn parse_args_authenticated_call() -> AppResult<()> {
    let args = ProbeArgs::try_parse_from([
        "apiprobe",
        "authenticated-call",
        "--url",
        "http://localhost/items",
        "--token",
        "secret",
        "--method",
        "post",
        "--data",
        r#"{"name":"widget"}"#,
    ])?;
    match args.command {
        Command::AuthenticatedCall(call) => {
            if call.method != HttpMethod::Post {
                return Err(AppError::validation("Expected POST"));
            }
            if call.token != "secret" {
                return Err(AppError::validation("Unexpected token"));
            }
            let name = call
                .data
                .as_ref()
                .and_then(|data| data.get("name"))
                .and_then(|name| name.as_str());
            if name != Some("widget") {
                return Err(AppError::validation("Unexpected data payload"));
            }
            Ok(())
        }
        _ => Err(AppError::validation("Expected authenticated-call subcommand")),
    }
}

#[test]
fn parse_args_authenticated_call_rejects_delete() -> AppResult<()> {
    match ProbeArgs::try_parse_from([
        "apiprobe",
        "authenticated-call",
        "--url",
        "http://localhost",
        "--token",
        "secret",
        "--method",
        "DELETE",
    ]) {
        Ok(_) => Err(AppError::validation("Expected DELETE to be rejected")),
        Err(_) => Ok(()),
    }
}

#[test]
fn parse_args_authenticated_call_rejects_bad_json() -> AppResult<()> {
    match ProbeArgs::try_parse_from([
        "apiprobe",
        "authenticated-call",
        "--url",
        "http://localhost",
        "--token",
        "secret",
        "--method",
        "PUT",
        "--data",
        "{not json",
    ]) {
        Ok(_) => Err(AppError::validation("Expected malformed --data to fail")),
        Err(_) => Ok(()),
    }
}

#[test]
fn parse_args_check_more_health_positional() -> AppResult<()> {
    let args = ProbeArgs::try_parse_from([
        "apiprobe",
        "check-more-health",
        "http://a.test",
        "http://b.test",
    ])?;
    match args.command {
        Command::CheckMoreHealth(health) => {
            if health.urls.len() != 2 {
                return Err(AppError::validation("Expected 2 urls"));
            }
            Ok(())
        }
        _ => Err(AppError::validation("Expected check-more-health subcommand")),
    }
}

#[test]
fn parse_args_snyk_commands() -> AppResult<()> {
    let test = ProbeArgs::try_parse_from(["apiprobe", "snyk-test", "--path", "./service"])?;
    if !matches!(&test.command, Command::SnykTest(scan) if scan.path == "./service") {
        return Err(AppError::validation("Expected snyk-test with path"));
    }
    let auth = ProbeArgs::try_parse_from(["apiprobe", "snyk-auth"])?;
    if !matches!(auth.command, Command::SnykAuth) {
        return Err(AppError::validation("Expected snyk-auth"));
    }
    match ProbeArgs::try_parse_from(["apiprobe", "snyk-monitor"]) {
        Ok(_) => Err(AppError::validation("Expected snyk-monitor without --path to fail")),
        Err(_) => Ok(()),
    }
}
