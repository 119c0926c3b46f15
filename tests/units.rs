use ml_units::{
    All2All, Unit, UnitBuilder, UnitErr, UnitRegistry, UnitSpec, Value, ValueKind,
    activations::ScaledTanh,
};

const VALUE_INPUT_INIT: f32 = 42.42;
const VALUE_OUTPUT_INIT: f32 = 412.31415;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn create_unit(registry: &UnitRegistry, name: &str) -> Box<dyn Unit> {
    registry.create(name).unwrap()
}

fn initialize_unit(
    unit: &mut dyn Unit,
    inputs: usize,
    outputs: usize,
    weights: Option<&[f32]>,
    bias: Option<&[f32]>,
) {
    let weights = weights.map_or_else(|| vec![0.0; inputs * outputs], <[f32]>::to_vec);
    let bias = bias.map_or_else(|| vec![0.0; outputs], <[f32]>::to_vec);

    unit.set_parameter("weights", Value::Floats(weights)).unwrap();
    unit.set_parameter("bias", Value::Floats(bias)).unwrap();
    unit.set_parameter("inputs", Value::Count(inputs)).unwrap();
    unit.set_parameter("outputs", Value::Count(outputs)).unwrap();
}

#[test]
fn linear_unit_example() {
    init_logger();
    let registry = UnitRegistry::with_defaults();
    let mut unit = create_unit(&registry, "all2all");
    initialize_unit(&mut *unit, 2, 1, Some(&[1.0, 2.0][..]), Some(&[0.5][..]));

    assert_eq!(unit.execute(&[3.0, 4.0]).unwrap(), [11.5]);
}

#[test]
fn tanh_unit_example() {
    init_logger();
    let registry = UnitRegistry::with_defaults();
    let mut unit = create_unit(&registry, "all2all_tanh");
    initialize_unit(&mut *unit, 2, 1, Some(&[1.0, 2.0][..]), Some(&[0.5][..]));

    let y = unit.execute(&[3.0, 4.0]).unwrap();
    let expected = (11.5 * ScaledTanh::SCALE_X).tanh() * ScaledTanh::SCALE_Y;

    assert_eq!(y.len(), 1);
    assert!((y[0] - expected).abs() <= 1e-6 * expected.abs());
}

#[test]
fn zero_weights_yield_the_activated_bias() {
    init_logger();
    let registry = UnitRegistry::with_defaults();
    let bias = [0.1, -0.2, 0.3];
    let input = [VALUE_INPUT_INIT; 4];

    let mut linear = create_unit(&registry, "all2all");
    initialize_unit(&mut *linear, 4, 3, None, Some(&bias[..]));
    assert_eq!(linear.execute(&input).unwrap(), bias);

    let mut tanh = create_unit(&registry, "all2all_tanh");
    initialize_unit(&mut *tanh, 4, 3, None, Some(&bias[..]));
    let y = tanh.execute(&input).unwrap();
    for (y, b) in y.iter().zip(bias) {
        let expected = (b * ScaledTanh::SCALE_X).tanh() * ScaledTanh::SCALE_Y;
        assert!((y - expected).abs() <= 1e-6 * expected.abs());
    }
}

#[test]
fn registry_round_trip_with_a_custom_unit() {
    init_logger();
    fn custom_tanh() -> Box<dyn Unit> {
        Box::new(All2All::new(
            "custom_tanh",
            ml_units::activations::Activation::scaled_tanh(),
        ))
    }

    let mut registry = UnitRegistry::new();
    registry.register("custom_tanh", custom_tanh).unwrap();

    let mut unit = create_unit(&registry, "custom_tanh");
    initialize_unit(&mut *unit, 1, 2, Some(&[2.0, -2.0][..]), None);

    let y = unit.execute(&[1.5]).unwrap();
    let expected = (3.0 * ScaledTanh::SCALE_X).tanh() * ScaledTanh::SCALE_Y;
    assert!((y[0] - expected).abs() <= 1e-6 * expected);
    assert!((y[1] + expected).abs() <= 1e-6 * expected);
}

#[test]
fn execute_is_bit_deterministic() {
    init_logger();
    let registry = UnitRegistry::with_defaults();
    let (inputs, outputs) = (300, 80);
    let weights: Vec<f32> = (0..inputs * outputs)
        .map(|i| ((i % 13) as f32 - 6.0) * 0.017)
        .collect();
    let bias: Vec<f32> = (0..outputs).map(|j| (j as f32).sqrt() * 0.1).collect();
    let input: Vec<f32> = (0..inputs).map(|i| 1.0 / (1.0 + i as f32)).collect();

    for name in registry.names() {
        let mut unit = create_unit(&registry, name);
        initialize_unit(&mut *unit, inputs, outputs, Some(&weights[..]), Some(&bias[..]));

        let first = unit.execute(&input).unwrap();
        let second = unit.execute(&input).unwrap();
        let mut third = vec![VALUE_OUTPUT_INIT; outputs];
        unit.execute_into(&input, &mut third).unwrap();

        for ((a, b), c) in first.iter().zip(&second).zip(&third) {
            assert_eq!(a.to_bits(), b.to_bits());
            assert_eq!(a.to_bits(), c.to_bits());
        }
    }
}

#[test]
fn mismatched_weights_never_compute() {
    init_logger();
    let registry = UnitRegistry::with_defaults();
    let mut unit = create_unit(&registry, "all2all_tanh");
    initialize_unit(&mut *unit, 3, 2, Some(&[1.0; 5][..]), None);

    let mut output = [VALUE_OUTPUT_INIT; 2];
    let err = unit.execute_into(&[1.0; 3], &mut output).unwrap_err();

    assert_eq!(
        err,
        UnitErr::DimensionMismatch {
            what: "weights",
            got: 5,
            expected: 6,
        }
    );
    assert_eq!(output, [VALUE_OUTPUT_INIT; 2]);
    assert!(unit.execute(&[1.0; 3]).is_err());
}

#[test]
fn rebinding_a_parameter_with_another_kind_fails() {
    init_logger();
    let registry = UnitRegistry::with_defaults();
    let mut unit = create_unit(&registry, "all2all");
    initialize_unit(&mut *unit, 1, 1, None, None);

    assert_eq!(
        unit.set_parameter("outputs", Value::Floats(vec![1.0])),
        Err(UnitErr::ParameterTypeMismatch {
            name: "outputs".to_string(),
            expected: ValueKind::Count,
            got: ValueKind::Floats,
        })
    );
    assert!(unit.execute(&[1.0]).is_ok());
}

#[test]
fn zero_outputs_give_an_empty_result() {
    init_logger();
    let registry = UnitRegistry::with_defaults();

    for name in registry.names() {
        let mut unit = create_unit(&registry, name);
        initialize_unit(&mut *unit, 5, 0, None, None);

        assert!(unit.execute(&[VALUE_INPUT_INIT; 5]).unwrap().is_empty());
    }
}

#[test]
fn softmax_unit_outputs_a_distribution() {
    init_logger();
    let registry = UnitRegistry::with_defaults();
    let spec = UnitSpec::from_json(
        r#"{"type": "all2all_softmax", "inputs": 2, "outputs": 3,
            "weights": [1.0, 0.0, -1.0, 0.5, 0.5, 0.5], "bias": [0.0, 0.1, 0.2]}"#,
    )
    .unwrap();
    let unit = UnitBuilder::new(&registry).build(&spec).unwrap();

    let y = unit.execute(&[2.0, -1.0]).unwrap();

    assert!((y.iter().sum::<f32>() - 1.0).abs() < 1e-6);
    assert!(y[0] > y[1] && y[1] > y[2]);
}

#[test]
fn specs_build_working_units() {
    init_logger();
    let registry = UnitRegistry::with_defaults();
    let builder = UnitBuilder::new(&registry);

    let linear = builder
        .build(&UnitSpec::new("all2all", 2, 1).with_weights(vec![1.0, 2.0]).with_bias(vec![0.5]))
        .unwrap();
    assert_eq!(linear.execute(&[3.0, 4.0]).unwrap(), [11.5]);

    let relu = builder
        .build(&UnitSpec::new("all2all_relu", 1, 1).with_weights(vec![1.0]))
        .unwrap();
    let y = relu.execute(&[0.0]).unwrap();
    assert!((y[0] - 2f32.ln()).abs() < 1e-6);

    let sigmoid = builder.build(&UnitSpec::new("all2all_sigmoid", 3, 2)).unwrap();
    assert_eq!(sigmoid.execute(&[1.0, 2.0, 3.0]).unwrap(), [0.5, 0.5]);
}
