pub const NEARBY_STOPS: &str = r#"
query NearbyStops($lat: Float!, $lon: Float!, $radius: Int!) {
  stopsByRadius(lat: $lat, lon: $lon, radius: $radius) {
    edges {
      node {
        stop {
          gtfsId
          name
          code
          desc
          lat
          lon
          routes {
            gtfsId
            shortName
            longName
            mode
          }
        }
        distance
      }
    }
  }
}
"#;

pub const STOP_TIMES: &str = r#"
query StopTimesWithPatterns(
  $stopId: String!
  $startTime: Long!
  $timeRange: Int!
  $numberOfDepartures: Int!
) {
  stop(id: $stopId) {
    stoptimesWithoutPatterns(
      startTime: $startTime
      timeRange: $timeRange
      numberOfDepartures: $numberOfDepartures
    ) {
      scheduledArrival
      realtimeArrival
      arrivalDelay
      realtime
      serviceDay
      trip {
        pattern {
          route {
            shortName
            mode
          }
        }
      }
    }
  }
}
"#;
