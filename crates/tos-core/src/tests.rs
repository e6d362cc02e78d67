//! Unit tests for tos-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, deg_to_rad, rad_to_deg};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(37.0, -122.0);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn symmetric() {
        let pairs = [
            (GeoPoint::new(48.8566, 2.349014), GeoPoint::new(37.733795, -122.446747)),
            (GeoPoint::new(-33.45694, -70.64827), GeoPoint::new(4.624335, -74.063644)),
            (GeoPoint::new(0.0, 179.9), GeoPoint::new(0.0, -179.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.distance_m(b), b.distance_m(a), "{a} vs {b}");
        }
    }

    #[test]
    fn paris_to_san_francisco() {
        let paris = GeoPoint::new(48.8566, 2.349014);
        let sf = GeoPoint::new(37.733795, -122.446747);
        let d = paris.distance_m(sf);
        assert!((d - 8_958_379.0).abs() <= 2.0, "got {d}");
    }

    #[test]
    fn sioux_falls_to_sioux_city() {
        let falls = GeoPoint::new(43.5445959, -96.7311034);
        let city = GeoPoint::new(42.4921646, -96.3908317);
        let d = falls.distance_m(city);
        assert!((d - 120_250.125).abs() < 0.5, "got {d}");
    }

    #[test]
    fn bogota_to_santiago_crosses_equator() {
        let bogota = GeoPoint::new(4.624335, -74.063644);
        let santiago = GeoPoint::new(-33.45694, -70.64827);
        let d = bogota.distance_m(santiago);
        assert!((d - 4_249_678.0).abs() <= 1.0, "got {d}");
    }

    #[test]
    fn one_degree_latitude() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn within_radius_is_inclusive() {
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(30.001, -88.0);
        let d = a.distance_m(b);
        assert!(a.within_radius(b, d));
        assert!(!a.within_radius(b, d - 1.0));
    }

    #[test]
    fn degree_radian_helpers() {
        assert!((deg_to_rad(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((rad_to_deg(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod bound {
    use crate::{BoundError, EARTH_RADIUS_M, GeoPoint, GpsBound};

    const SF: GeoPoint = GeoPoint { lat: 37.733795, lon: -122.446747 };

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn reference_box_with_multiplier_two() {
        let b = GpsBound::around(SF, 500.0, 2.0).unwrap();
        assert!(close(b.lat_min, 37.7248), "{b:?}");
        assert!(close(b.lat_max, 37.74279), "{b:?}");
        assert!(close(b.lon_min, -122.45574), "{b:?}");
        assert!(close(b.lon_max, -122.43775), "{b:?}");
    }

    #[test]
    fn negative_radius_matches_absolute() {
        let pos = GpsBound::around(SF, 500.0, 2.0).unwrap();
        let neg = GpsBound::around(SF, -500.0, 2.0).unwrap();
        assert_eq!(pos, neg);
    }

    #[test]
    fn zero_radius_is_center_point() {
        for m in [1.0, 2.0, 10.0] {
            let b = GpsBound::around(SF, 0.0, m).unwrap();
            assert_eq!(b, GpsBound { lat_min: SF.lat, lat_max: SF.lat, lon_min: SF.lon, lon_max: SF.lon });
            assert!(b.contains(SF));
            assert!(!b.contains(GeoPoint::new(SF.lat, SF.lon + 0.0001)));
        }
    }

    #[test]
    fn pole_overlap_fails() {
        let err = GpsBound::around(GeoPoint::new(89.9999, -122.446747), 1000.0, 2.0).unwrap_err();
        assert!(matches!(err, BoundError::PoleOverlap { .. }));

        let south = GpsBound::around(GeoPoint::new(-89.9999, 10.0), 1000.0, 1.0);
        assert!(south.is_err());
    }

    #[test]
    fn anti_meridian_clamps_to_full_range() {
        let b = GpsBound::around(GeoPoint::new(37.733795, -179.999), 1000.0, 2.0).unwrap();
        assert_eq!(b.lon_min, -180.0);
        assert_eq!(b.lon_max, 180.0);
        assert!(close(b.lat_min, 37.71581), "{b:?}");
        assert!(close(b.lat_max, 37.75178), "{b:?}");

        let east = GpsBound::around(GeoPoint::new(0.0, 179.999), 1000.0, 2.0).unwrap();
        assert_eq!((east.lon_min, east.lon_max), (-180.0, 180.0));
    }

    #[test]
    fn wider_multiplier_gives_wider_box() {
        let narrow = GpsBound::around(SF, 500.0, 1.0).unwrap();
        let wide = GpsBound::around(SF, 500.0, 3.0).unwrap();
        assert!(wide.lat_min < narrow.lat_min && wide.lat_max > narrow.lat_max);
        assert!(wide.lon_min < narrow.lon_min && wide.lon_max > narrow.lon_max);
    }

    #[test]
    fn box_contains_points_on_the_circle() {
        let radius = 500.0_f32;
        let angular = f64::from(radius) * 0.999 / EARTH_RADIUS_M;
        for lat in [-50.0_f32, -10.0, 0.0, 37.0, 50.0] {
            let center = GeoPoint::new(lat, 12.5);
            let b = GpsBound::around(center, radius, 2.0).unwrap();
            for step in 0..16 {
                let theta = f64::from(step) * std::f64::consts::TAU / 16.0;
                let d_lat = (angular * theta.cos()).to_degrees();
                let d_lon = (angular * theta.sin() / f64::from(lat).to_radians().cos()).to_degrees();
                let p = GeoPoint::new(
                    (f64::from(lat) + d_lat) as f32,
                    (12.5 + d_lon) as f32,
                );
                assert!(center.distance_m(p) <= radius + 1.0);
                assert!(b.contains(p), "lat {lat} step {step}: {p} outside {b:?}");
            }
        }
    }
}

#[cfg(test)]
mod time {
    use crate::{TimeWindow, TosError};

    #[test]
    fn valid_window() {
        let w = TimeWindow::new(0, 200_000).unwrap();
        assert_eq!(w.start_ms(), 0);
        assert_eq!(w.end_ms(), 200_000);
    }

    #[test]
    fn empty_or_reversed_window_rejected() {
        assert!(matches!(TimeWindow::new(5, 5), Err(TosError::InvalidWindow { .. })));
        assert!(matches!(TimeWindow::new(10, 5), Err(TosError::InvalidWindow { .. })));
    }

    #[test]
    fn ending_at_subtracts_duration() {
        let w = TimeWindow::ending_at(1_540_341_729_936, 3_600_000).unwrap();
        assert_eq!(w.start_ms(), 1_540_338_129_936);
        assert_eq!(w.end_ms(), 1_540_341_729_936);
        assert!(TimeWindow::ending_at(100, 0).is_err());
        assert!(TimeWindow::ending_at(100, -5).is_err());
        assert!(TimeWindow::ending_at(i64::MIN, 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(TimeWindow::new(1, 2).unwrap().to_string(), "[1 ms, 2 ms]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates_bounds() {
        let w: TimeWindow = serde_json::from_str(r#"{"start_ms": 0, "end_ms": 200000}"#).unwrap();
        assert_eq!(w, TimeWindow::new(0, 200_000).unwrap());

        let reversed = serde_json::from_str::<TimeWindow>(r#"{"start_ms": 10, "end_ms": 5}"#);
        assert!(reversed.unwrap_err().to_string().contains("invalid time window"));
        assert!(serde_json::from_str::<TimeWindow>(r#"{"start_ms": 5, "end_ms": 5}"#).is_err());
    }
}
