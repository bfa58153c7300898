// Tests for the plant lifecycle state machine

#[cfg(test)]
mod tests {
    use super::super::mocks::*;
    use super::super::state_machine::*;
    use super::super::types::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn machine_at(stage: LifecycleStage, health: i32) -> (Rc<RefCell<MockPlant>>, LifecycleStateMachine) {
        let plant = Rc::new(RefCell::new(MockPlant::with_health(health)));
        let mut machine = LifecycleStateMachine::new(&plant);
        machine.set_stage(stage);
        (plant, machine)
    }

    #[test]
    fn test_care_deltas_for_every_stage() {
        let table = [
            (LifecycleStage::Seedling, 10, 5),
            (LifecycleStage::Growing, 15, 10),
            (LifecycleStage::Mature, 10, 5),
            (LifecycleStage::Flowering, 15, 10),
            (LifecycleStage::Dormant, 5, 0),
        ];

        for (stage, water, fertilize) in table {
            let (plant, mut machine) = machine_at(stage, 0);

            assert_eq!(machine.water().unwrap(), water, "water in {stage}");
            assert_eq!(machine.fertilize().unwrap(), water + fertilize, "fertilize in {stage}");
            assert_eq!(plant.borrow().deltas, vec![water, fertilize]);
            assert_eq!(
                plant.borrow().care_log,
                vec![CareAction::Water, CareAction::Fertilize]
            );
            // care never moves the stage
            assert_eq!(machine.stage(), stage);
        }
    }

    #[test]
    fn test_care_table_matches_machine() {
        for stage in LifecycleStage::ALL {
            for action in [CareAction::Water, CareAction::Fertilize] {
                let (plant, mut machine) = machine_at(stage, 37);
                match action {
                    CareAction::Water => machine.water().unwrap(),
                    CareAction::Fertilize => machine.fertilize().unwrap(),
                };
                // delta is added to the current health, not assigned
                assert_eq!(plant.borrow().health, 37 + stage.care_delta(action));
            }
        }
    }

    #[test]
    fn test_seedling_threshold_is_strict() {
        let (_plant, mut machine) = machine_at(LifecycleStage::Seedling, 50);
        let report = machine.check_health().unwrap();
        assert!(!report.transitioned());
        assert_eq!(machine.stage(), LifecycleStage::Seedling);

        let (_plant, mut machine) = machine_at(LifecycleStage::Seedling, 51);
        let report = machine.check_health().unwrap();
        assert_eq!(report.stage_before, LifecycleStage::Seedling);
        assert_eq!(report.stage_after, LifecycleStage::Growing);
        assert_eq!(report.health, 51);
    }

    #[test]
    fn test_growing_threshold_is_strict() {
        let (_plant, mut machine) = machine_at(LifecycleStage::Growing, 80);
        machine.check_health().unwrap();
        assert_eq!(machine.stage(), LifecycleStage::Growing);

        let (_plant, mut machine) = machine_at(LifecycleStage::Growing, 81);
        machine.check_health().unwrap();
        assert_eq!(machine.stage(), LifecycleStage::Mature);
    }

    #[test]
    fn test_later_stages_never_advance_on_health() {
        for stage in [
            LifecycleStage::Mature,
            LifecycleStage::Flowering,
            LifecycleStage::Dormant,
        ] {
            let (_plant, mut machine) = machine_at(stage, 100);
            for _ in 0..5 {
                let report = machine.check_health().unwrap();
                assert!(!report.transitioned());
            }
            assert_eq!(machine.stage(), stage);
        }
    }

    #[test]
    fn test_set_stage_round_trip_from_any_stage() {
        for from in LifecycleStage::ALL {
            for to in LifecycleStage::ALL {
                let (_plant, mut machine) = machine_at(from, 10);
                machine.set_stage(to);
                assert_eq!(machine.stage(), to, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn test_dormant_only_leaves_by_manual_stage() {
        let (_plant, mut machine) = machine_at(LifecycleStage::Dormant, 100);
        machine.water().unwrap();
        machine.check_health().unwrap();
        assert_eq!(machine.stage(), LifecycleStage::Dormant);

        machine.set_stage(LifecycleStage::Growing);
        assert_eq!(machine.stage(), LifecycleStage::Growing);
    }

    #[test]
    fn test_unbound_machine_reports_error() {
        let mut machine = LifecycleStateMachine::unbound();
        assert!(!machine.is_bound());
        assert_eq!(machine.water(), Err(LifecycleError::PlantUnbound));
        assert_eq!(machine.check_health(), Err(LifecycleError::PlantUnbound));
    }

    #[test]
    fn test_parse_stage_names() {
        assert_eq!("Seedling".parse::<LifecycleStage>(), Ok(LifecycleStage::Seedling));
        assert_eq!(" flowering ".parse::<LifecycleStage>(), Ok(LifecycleStage::Flowering));
        assert_eq!("DORMANT".parse::<LifecycleStage>(), Ok(LifecycleStage::Dormant));
        assert!("sapling".parse::<LifecycleStage>().is_err());
        assert_eq!(LifecycleStage::Mature.to_string(), "mature");
    }

    #[test]
    fn test_next_on_health_table() {
        let thresholds = GrowthThresholds::default();
        assert_eq!(
            LifecycleStage::Seedling.next_on_health(51, &thresholds),
            Some(LifecycleStage::Growing)
        );
        assert_eq!(LifecycleStage::Seedling.next_on_health(50, &thresholds), None);
        assert_eq!(
            LifecycleStage::Growing.next_on_health(81, &thresholds),
            Some(LifecycleStage::Mature)
        );
        assert_eq!(LifecycleStage::Flowering.next_on_health(100, &thresholds), None);
    }
}
