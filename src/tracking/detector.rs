//! Hierarchical detection of new segment candidates.

use std::sync::Arc;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::feature::candidate::FeatureSegment;
use crate::image::raw::RawImage;
use crate::image::roi::ConvexRoi;
use crate::map::descriptor::DescriptorFactory;
use crate::tracking::capabilities::HierarchicalSegmentDetector;
use crate::tracking::observation_builder::ObservationBuilder;

/// Detection parameters, immutable after detector construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Pyramid depth of the coarse-to-fine search.
    pub hierarchy_level: u32,
    /// Noise std assigned to detected measurements, in pixels.
    pub meas_std: f64,
}

impl DetectorParams {
    /// Measurement noise variance, `meas_std^2`.
    pub fn meas_var(&self) -> f64 {
        self.meas_std * self.meas_std
    }

    pub fn validate(&self) -> Result<()> {
        if self.hierarchy_level == 0 {
            bail!("hierarchy_level must be at least 1");
        }
        if self.meas_std <= 0.0 {
            bail!("meas_std must be positive, got {}", self.meas_std);
        }
        Ok(())
    }
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            hierarchy_level: 3,
            meas_std: 1.0,
        }
    }
}

/// Produces unclassified segment candidates from image regions.
///
/// Detection is deliberately cheap: the returned candidate carries only the
/// measurement and the seed hypothesis. Patch and descriptor extraction are
/// deferred to the [`ObservationBuilder`] (which this detector hands its
/// descriptor factory), so candidates the map rejects never pay that cost.
pub struct SegmentDetector {
    params: DetectorParams,
    detector: Arc<dyn HierarchicalSegmentDetector>,
    desc_factory: Arc<dyn DescriptorFactory>,
}

impl SegmentDetector {
    pub fn new(
        params: DetectorParams,
        detector: Arc<dyn HierarchicalSegmentDetector>,
        desc_factory: Arc<dyn DescriptorFactory>,
    ) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            detector,
            desc_factory,
        })
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Search `roi` for a new segment.
    ///
    /// On success the candidate's measurement has `std` preset to the
    /// configured `meas_std` and endpoints filled by the underlying
    /// detector. Returns `None` when the region contains no detectable
    /// structure. Deterministic given identical image, roi, and detector
    /// configuration.
    pub fn detect(&self, raw: &RawImage, roi: &ConvexRoi) -> Option<FeatureSegment> {
        let mut feature = FeatureSegment::new();
        feature.measurement.set_std(self.params.meas_std);

        let found = self.detector.detect_in(raw.mat(), &mut feature, roi);
        debug!(found, "hierarchical segment detection");

        // Appearance extraction is deferred until the candidate is accepted.
        if found {
            Some(feature)
        } else {
            None
        }
    }

    /// Builder wired to this detector's descriptor factory, for
    /// materializing accepted candidates into observations.
    pub fn observation_builder(&self) -> ObservationBuilder {
        ObservationBuilder::new(self.desc_factory.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Vector2, Vector4};
    use opencv::core::Mat;

    use crate::feature::segment::SegmentHypothesis;
    use crate::map::descriptor::SequentialDescriptorFactory;

    /// Reports a fixed segment when asked, or nothing.
    struct StubDetector {
        hit: Option<Vector4<f64>>,
    }

    impl HierarchicalSegmentDetector for StubDetector {
        fn detect_in(&self, _image: &Mat, feature: &mut FeatureSegment, _roi: &ConvexRoi) -> bool {
            match self.hit {
                Some(x) => {
                    feature.measurement.x = x;
                    feature
                        .appearance
                        .as_segment_mut()
                        .expect("detector candidates carry segment appearances")
                        .set_hypothesis(SegmentHypothesis::from_extremities(&x));
                    true
                }
                None => false,
            }
        }
    }

    fn detector_with(hit: Option<Vector4<f64>>, meas_std: f64) -> SegmentDetector {
        SegmentDetector::new(
            DetectorParams {
                meas_std,
                ..DetectorParams::default()
            },
            Arc::new(StubDetector { hit }),
            Arc::new(SequentialDescriptorFactory::new()),
        )
        .unwrap()
    }

    fn test_frame() -> RawImage {
        RawImage::new(Mat::default(), 0)
    }

    fn test_roi() -> ConvexRoi {
        ConvexRoi::from_rect(0.0, 0.0, 320.0, 240.0)
    }

    #[test]
    fn test_empty_region_yields_none() {
        let detector = detector_with(None, 1.0);
        assert!(detector.detect(&test_frame(), &test_roi()).is_none());
    }

    #[test]
    fn test_detected_candidate_has_configured_std() {
        let x = Vector4::new(10.0, 20.0, 30.0, 40.0);
        let detector = detector_with(Some(x), 0.75);

        let feature = detector.detect(&test_frame(), &test_roi()).unwrap();

        assert_eq!(feature.measurement.std(), 0.75);
        assert_eq!(feature.measurement.x, x);
        assert_eq!(
            feature.appearance.as_segment().unwrap().hypothesis(),
            &SegmentHypothesis::new(Vector2::new(10.0, 20.0), Vector2::new(30.0, 40.0))
        );
    }

    #[test]
    fn test_detection_is_deterministic() {
        let detector = detector_with(Some(Vector4::new(1.0, 2.0, 3.0, 4.0)), 1.0);
        let frame = test_frame();
        let roi = test_roi();

        let first = detector.detect(&frame, &roi).unwrap();
        let second = detector.detect(&frame, &roi).unwrap();

        assert_eq!(first.measurement, second.measurement);
    }

    #[test]
    fn test_rejects_invalid_params() {
        let stub: Arc<dyn HierarchicalSegmentDetector> = Arc::new(StubDetector { hit: None });
        let factory = Arc::new(SequentialDescriptorFactory::new());

        let params = DetectorParams {
            meas_std: -1.0,
            ..DetectorParams::default()
        };
        assert!(SegmentDetector::new(params, stub.clone(), factory.clone()).is_err());

        let params = DetectorParams {
            hierarchy_level: 0,
            ..DetectorParams::default()
        };
        assert!(SegmentDetector::new(params, stub, factory).is_err());
    }
}
