use super::{FakeSession, Recorded, RecordingDriver};
use anyhow::Result;
use desdb::prelude::*;
use desdb::test_util::init_tracing;
use desdb::{oracle_dsn, postgres_dsn};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn factory(home: &Path) -> (ConnectionFactory, RecordingDriver, RecordingDriver) {
    init_tracing();
    let oracle = RecordingDriver::default();
    let postgres = RecordingDriver::default();
    let authenticator = Authenticator::new(Defaults::default(), CredentialPaths::in_home(home));
    let factory = ConnectionFactory::without_drivers(authenticator)
        .with_driver(DbType::Oracle, oracle.clone())
        .with_driver(DbType::Postgres, postgres.clone());
    (factory, oracle, postgres)
}

fn empty_home() -> Result<TempDir> {
    Ok(tempfile::tempdir()?)
}

#[test]
fn test_oracle_connect_string() -> Result<()> {
    let home = empty_home()?;
    let (factory, oracle, postgres) = factory(home.path());

    let conn = factory.connect(&ResolveOptions::new().user("alice").password("Secret1"))?;
    assert_eq!(conn.dbtype(), DbType::Oracle);
    assert_eq!(conn.credentials().source(), CredentialType::Keyword);
    assert_eq!(
        oracle.requests(),
        vec![Recorded {
            dbtype: DbType::Oracle,
            dsn: "leovip148.ncsa.uiuc.edu:1521/dessci".to_string(),
            user: "alice".to_string(),
            password: "Secret1".to_string(),
        }]
    );
    assert!(postgres.requests().is_empty());
    Ok(())
}

#[test]
fn test_postgres_connect_string() -> Result<()> {
    let home = empty_home()?;
    let (factory, oracle, postgres) = factory(home.path());

    factory.connect(
        &ResolveOptions::new()
            .user("alice")
            .password("Secret1")
            .dbtype("postgres")
            .host("myhost")
            .name("mydb"),
    )?;
    let requests = postgres.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].dsn,
        "host=myhost dbname=mydb user=alice password=Secret1 port=5432"
    );
    assert!(oracle.requests().is_empty());
    Ok(())
}

#[test]
fn test_dsn_builders() -> Result<()> {
    let home = empty_home()?;
    let creds = Authenticator::new(Defaults::default(), CredentialPaths::in_home(home.path()))
        .resolve(
            &ResolveOptions::new()
                .user("u")
                .password("p")
                .host("h")
                .port(1600)
                .name("db"),
        )?;
    assert_eq!(oracle_dsn(&creds), "h:1600/db");
    assert_eq!(postgres_dsn(&creds), "host=h dbname=db user=u password=p port=1600");
    assert_eq!(ConnectRequest::new(&creds).dsn, "h:1600/db");
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_services_file_picks_driver() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let home = empty_home()?;
    let path = home.path().join(".desservices.ini");
    fs::write(
        &path,
        "[db-dessci]\nuser=alice\npasswd=Secret1\nserver=myhost\ntype=postgres\nname=mydb\n",
    )?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
    let (factory, oracle, postgres) = factory(home.path());

    let conn = factory.connect(&ResolveOptions::new())?;
    assert_eq!(conn.dbtype(), DbType::Postgres);
    assert_eq!(conn.credentials().source(), CredentialType::Services);
    assert_eq!(
        postgres.requests()[0].dsn,
        "host=myhost dbname=mydb user=alice password=Secret1 port=5432"
    );
    assert!(oracle.requests().is_empty());
    Ok(())
}

#[test]
fn test_forwarded_operations() -> Result<()> {
    let home = empty_home()?;
    let (factory, oracle, _) = factory(home.path());

    let mut conn = factory.connect(&ResolveOptions::new().user("u").password("p"))?;
    conn.ping()?;
    conn.commit()?;
    conn.rollback()?;
    assert!(conn.native::<FakeSession>().is_some());
    assert!(conn.native_mut::<String>().is_none());
    conn.close()?;
    assert_eq!(oracle.events(), vec!["ping", "commit", "rollback", "close"]);
    Ok(())
}

#[test]
fn test_resolution_errors_propagate() -> Result<()> {
    let home = empty_home()?;
    let (factory, oracle, _) = factory(home.path());

    let err = factory
        .connect(&ResolveOptions::new().user("alice"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Auth(desdb::auth::Error::InvalidArgument(_))
    ));

    let err = factory
        .connect(&ResolveOptions::new().host("db.example.org"))
        .unwrap_err();
    assert!(err.to_string().contains("db.example.org"));

    let err = factory
        .connect(&ResolveOptions::new().user("u").password("p").dbtype("sqlite"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Auth(desdb::auth::Error::UnsupportedDbType(_))
    ));
    assert!(oracle.requests().is_empty());
    Ok(())
}

#[test]
fn test_missing_driver() -> Result<()> {
    let home = empty_home()?;
    let authenticator =
        Authenticator::new(Defaults::default(), CredentialPaths::in_home(home.path()));
    let factory = ConnectionFactory::without_drivers(authenticator);

    let err = factory
        .connect(&ResolveOptions::new().user("u").password("p"))
        .unwrap_err();
    assert!(matches!(err, Error::DriverUnavailable(DbType::Oracle)));
    Ok(())
}

#[test]
fn test_driver_failure() -> Result<()> {
    let home = empty_home()?;
    let authenticator =
        Authenticator::new(Defaults::default(), CredentialPaths::in_home(home.path()));
    let factory = ConnectionFactory::without_drivers(authenticator)
        .with_driver(DbType::Oracle, RecordingDriver::refusing());

    let err = factory
        .connect(&ResolveOptions::new().user("u").password("p"))
        .unwrap_err();
    match err {
        Error::Driver { dbtype, source } => {
            assert_eq!(dbtype, DbType::Oracle);
            assert_eq!(source.to_string(), "connection refused");
        }
        other => panic!("expected driver error, got {:?}", other),
    }
    Ok(())
}
