use std::io::Write;
use weather::{Channel, Float, Weather, WeatherError};

fn synthetic_epw() -> String {
    let mut epw = "LOCATION,WELLINGTON,-,NZL,IWEC Data,934360,-41.33,174.80,12.0,7.0\n\
        DESIGN CONDITIONS,0\n\
        TYPICAL/EXTREME PERIODS,0\n\
        GROUND TEMPERATURES,0\n\
        HOLIDAYS/DAYLIGHT SAVINGS,No,0,0,0\n\
        COMMENTS 1,\n\
        COMMENTS 2,\n\
        DATA PERIODS,1,1,Data,Sunday, 1/ 1,12/31\n"
        .to_string();

    let calendar = calendar::Calendar::new();
    for stamp in calendar.iter() {
        let t = 10. + stamp.month as Float;
        epw.push_str(&format!(
            "1999,{},{},{},60,*,{},5,70,101000,0,0,300,100,200,50,0,0,0,0,180,3.0,0,0,0,0,0,0,0,0,0,0,0,0,0\n",
            stamp.month, stamp.day, stamp.hour, t
        ));
    }
    epw
}

#[test]
fn test_go_through() -> Result<(), WeatherError> {
    let mut file = tempfile::NamedTempFile::new().map_err(|source| WeatherError::Io {
        path: "tempfile".into(),
        source,
    })?;
    file.write_all(synthetic_epw().as_bytes())
        .map_err(|source| WeatherError::Io {
            path: file.path().to_path_buf(),
            source,
        })?;

    let weather = Weather::from_epw_file(file.path())?;
    assert!(weather.is_complete());
    assert_eq!(weather.location.city, "WELLINGTON");
    validate::assert_close!(weather.location.longitude, 174.8);
    validate::assert_close!(weather.location.timezone, 12.0);

    let dry_bulb = weather.channel(Channel::DryBulbTemperature);
    validate::assert_close!(dry_bulb[0], 11.0);
    validate::assert_close!(dry_bulb[744], 12.0);
    validate::assert_close!(dry_bulb[8759], 22.0);

    for (i, v) in weather.channel(Channel::WindSpeed).iter().enumerate() {
        assert_eq!(*v, 3.0, "wind speed at hour {}", i);
    }

    Ok(())
}

#[test]
fn test_missing_file() {
    let err = Weather::from_epw_file("./this/file/does/not/exist.epw").unwrap_err();
    match err {
        WeatherError::Io { path, .. } => {
            assert!(path.ends_with("exist.epw"))
        }
        other => panic!("unexpected error: {}", other),
    }
}
