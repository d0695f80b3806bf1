//! Property tests over generated pools

mod common;

use common::*;
use proptest::prelude::*;
use vtpool::objects::*;
use vtpool::types::options::{
    ArchedBarGraphOptions, ButtonOptions, FontStyle, InputOptions, LineSuppression,
    LinearBarGraphOptions, MeterOptions, NumberOptions, PictureOptions, StringOptions,
};
use vtpool::types::{Color, MacroRef, ObjectId, PlacedRef, Point};
use vtpool::{create_unique_name, InputFormat, PoolError, PoolImporter};

fn object_ref() -> impl Strategy<Value = ObjectId> {
    prop_oneof![Just(ObjectId::NULL), (0u16..64).prop_map(ObjectId::new)]
}

fn colour() -> impl Strategy<Value = Color> {
    any::<u8>().prop_map(Color)
}

/// Latin-1 text including quotes, backslashes and control characters
fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \"\\\\\n\r\t\u{1}\u{e9}]{0,12}"
}

/// Angles in degrees as the wire can hold them: even, at most 510
fn angle() -> impl Strategy<Value = u16> {
    (0u16..=255).prop_map(|half| half * 2)
}

fn scale() -> impl Strategy<Value = f32> {
    -1000.0f32..1000.0
}

fn placed() -> impl Strategy<Value = Vec<PlacedRef>> {
    prop::collection::vec(
        (object_ref(), any::<i16>(), any::<i16>()).prop_map(|(id, x, y)| PlacedRef::new(id, x, y)),
        0..4,
    )
}

fn macro_refs() -> impl Strategy<Value = Vec<MacroRef>> {
    prop::collection::vec(
        (any::<u8>(), any::<u8>()).prop_map(|(event, id)| MacroRef::new(event, id)),
        0..3,
    )
}

fn refs() -> impl Strategy<Value = Vec<ObjectId>> {
    prop::collection::vec(object_ref(), 0..4)
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (object_ref(), any::<bool>())
            .prop_map(|(object, show)| Command::HideShowObject { object, show }),
        (object_ref(), any::<bool>())
            .prop_map(|(object, enable)| Command::EnableDisableObject { object, enable }),
        (object_ref(), any::<u8>())
            .prop_map(|(object, option)| Command::SelectInputObject { object, option }),
        (any::<u8>(), any::<u16>(), any::<u16>(), any::<u16>()).prop_map(
            |(repetitions, frequency, on_time, off_time)| Command::ControlAudioDevice {
                repetitions,
                frequency,
                on_time,
                off_time,
            }
        ),
        any::<u8>().prop_map(|volume| Command::SetAudioVolume { volume }),
        (object_ref(), object_ref(), -127i16..=128, -127i16..=128).prop_map(
            |(parent, child, dx, dy)| Command::ChangeChildLocation {
                parent,
                child,
                dx,
                dy
            }
        ),
        (object_ref(), any::<u16>(), any::<u16>())
            .prop_map(|(object, width, height)| Command::ChangeSize { object, width, height }),
        (object_ref(), colour())
            .prop_map(|(object, colour)| Command::ChangeBackgroundColour { object, colour }),
        (object_ref(), any::<u32>())
            .prop_map(|(object, value)| Command::ChangeNumericValue { object, value }),
        (object_ref(), any::<u16>(), any::<u16>(), any::<u8>()).prop_map(
            |(object, width, height, line_direction)| Command::ChangeEndPoint {
                object,
                width,
                height,
                line_direction,
            }
        ),
    ]
}

fn attribute_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        (object_ref(), colour(), any::<u8>(), any::<u8>(), any::<u8>()).prop_map(
            |(object, colour, size, font_type, style)| Command::ChangeFontAttributes {
                object,
                colour,
                size,
                font_type,
                style,
            }
        ),
        (object_ref(), colour(), any::<u8>(), any::<u16>()).prop_map(
            |(object, colour, width, line_art)| Command::ChangeLineAttributes {
                object,
                colour,
                width,
                line_art,
            }
        ),
        (object_ref(), any::<u8>(), colour(), object_ref()).prop_map(
            |(object, fill_type, colour, pattern)| Command::ChangeFillAttributes {
                object,
                fill_type,
                colour,
                pattern,
            }
        ),
        (object_ref(), object_ref())
            .prop_map(|(working_set, mask)| Command::ChangeActiveMask { working_set, mask }),
        (any::<u8>(), object_ref(), object_ref()).prop_map(|(mask_type, mask, soft_key_mask)| {
            Command::ChangeSoftKeyMask {
                mask_type,
                mask,
                soft_key_mask,
            }
        }),
        (object_ref(), any::<u8>(), any::<u32>()).prop_map(|(object, attribute_id, value)| {
            Command::ChangeAttribute {
                object,
                attribute_id,
                value,
            }
        }),
        (object_ref(), any::<u8>())
            .prop_map(|(object, priority)| Command::ChangePriority { object, priority }),
        (object_ref(), any::<u8>(), object_ref()).prop_map(|(list, index, new_object)| {
            Command::ChangeListItem {
                list,
                index,
                new_object,
            }
        }),
        (object_ref(), text())
            .prop_map(|(object, value)| Command::ChangeStringValue { object, value }),
        (object_ref(), object_ref(), any::<i16>(), any::<i16>())
            .prop_map(|(parent, child, x, y)| Command::ChangeChildPosition { parent, child, x, y }),
    ]
}

fn mask() -> impl Strategy<Value = VtObject> {
    prop_oneof![
        (colour(), any::<bool>(), object_ref(), placed(), macro_refs(), prop::collection::vec("[a-z]{2}", 0..3))
            .prop_map(|(background_colour, selectable, active_mask, objects, macros, languages)| {
                VtObject::WorkingSet(WorkingSet {
                    background_colour,
                    selectable,
                    active_mask,
                    objects,
                    macros,
                    languages,
                })
            }),
        (colour(), object_ref(), placed(), macro_refs()).prop_map(
            |(background_colour, soft_key_mask, objects, macros)| {
                VtObject::DataMask(DataMask {
                    background_colour,
                    soft_key_mask,
                    objects,
                    macros,
                })
            }
        ),
        (colour(), object_ref(), any::<u8>(), any::<u8>(), placed(), macro_refs()).prop_map(
            |(background_colour, soft_key_mask, priority, acoustic_signal, objects, macros)| {
                VtObject::AlarmMask(AlarmMask {
                    background_colour,
                    soft_key_mask,
                    priority,
                    acoustic_signal,
                    objects,
                    macros,
                })
            }
        ),
        (any::<u16>(), any::<u16>(), any::<bool>(), placed(), macro_refs()).prop_map(
            |(width, height, hidden, objects, macros)| {
                VtObject::Container(Container {
                    width,
                    height,
                    hidden,
                    objects,
                    macros,
                })
            }
        ),
        (colour(), refs(), macro_refs()).prop_map(|(background_colour, keys, macros)| {
            VtObject::SoftKeyMask(SoftKeyMask {
                background_colour,
                keys,
                macros,
            })
        }),
        (colour(), any::<u8>(), placed(), macro_refs()).prop_map(
            |(background_colour, key_code, objects, macros)| {
                VtObject::Key(Key {
                    background_colour,
                    key_code,
                    objects,
                    macros,
                })
            }
        ),
        (
            (any::<u16>(), any::<u16>(), colour(), colour()),
            (any::<u8>(), any::<u8>(), placed(), macro_refs()),
        )
            .prop_map(
                |((width, height, background_colour, border_colour), (key_code, options, objects, macros))| {
                    VtObject::Button(Button {
                        width,
                        height,
                        background_colour,
                        border_colour,
                        key_code,
                        options: ButtonOptions::from_bits_retain(options),
                        objects,
                        macros,
                    })
                }
            ),
        (colour(), any::<u8>(), placed()).prop_map(|(background_colour, function_type, objects)| {
            VtObject::AuxiliaryFunction(AuxiliaryFunction {
                background_colour,
                function_type,
                objects,
            })
        }),
        (colour(), any::<u8>(), any::<u8>(), placed()).prop_map(
            |(background_colour, function_type, input_id, objects)| {
                VtObject::AuxiliaryInput(AuxiliaryInput {
                    background_colour,
                    function_type,
                    input_id,
                    objects,
                })
            }
        ),
    ]
}

fn field() -> impl Strategy<Value = VtObject> {
    prop_oneof![
        (colour(), any::<u16>(), object_ref(), object_ref(), any::<bool>(), any::<bool>(), macro_refs())
            .prop_map(
                |(background_colour, width, foreground_colour, variable_reference, value, enabled, macros)| {
                    VtObject::InputBoolean(InputBoolean {
                        background_colour,
                        width,
                        foreground_colour,
                        variable_reference,
                        value,
                        enabled,
                        macros,
                    })
                }
            ),
        (
            (any::<u16>(), any::<u16>(), colour(), object_ref(), object_ref(), any::<u8>()),
            (object_ref(), any::<u8>(), text(), any::<bool>(), macro_refs()),
        )
            .prop_map(
                |(
                    (width, height, background_colour, font_attributes, input_attributes, options),
                    (variable_reference, justification, text, enabled, macros),
                )| {
                    let length = text.chars().count() as u8;
                    VtObject::InputString(InputString {
                        width,
                        height,
                        background_colour,
                        font_attributes,
                        input_attributes,
                        options: StringOptions::from_bits_retain(options),
                        variable_reference,
                        justification,
                        length,
                        value: variable_reference.is_null().then_some(text),
                        enabled,
                        macros,
                    })
                }
            ),
        (
            (any::<u16>(), any::<u16>(), colour(), object_ref(), any::<u8>(), object_ref()),
            (any::<u32>(), any::<u32>(), any::<u32>(), any::<i32>(), scale()),
            (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>(), macro_refs()),
        )
            .prop_map(
                |(
                    (width, height, background_colour, font_attributes, options, variable_reference),
                    (value, min_value, max_value, offset, scale),
                    (number_of_decimals, format, justification, options2, macros),
                )| {
                    VtObject::InputNumber(InputNumber {
                        width,
                        height,
                        background_colour,
                        font_attributes,
                        options: NumberOptions::from_bits_retain(options),
                        variable_reference,
                        value,
                        min_value,
                        max_value,
                        offset,
                        scale,
                        number_of_decimals,
                        format,
                        justification,
                        options2: InputOptions::from_bits_retain(options2),
                        macros,
                    })
                }
            ),
        (any::<u16>(), any::<u16>(), object_ref(), any::<u8>(), any::<u8>(), refs(), macro_refs())
            .prop_map(|(width, height, variable_reference, value, options, items, macros)| {
                VtObject::InputList(InputList {
                    width,
                    height,
                    variable_reference,
                    value,
                    options: InputOptions::from_bits_retain(options),
                    items,
                    macros,
                })
            }),
        (
            (any::<u16>(), any::<u16>(), colour(), object_ref(), any::<u8>()),
            (object_ref(), any::<u8>(), text(), macro_refs()),
        )
            .prop_map(
                |(
                    (width, height, background_colour, font_attributes, options),
                    (variable_reference, justification, text, macros),
                )| {
                    let length = text.chars().count() as u16;
                    VtObject::OutputString(OutputString {
                        width,
                        height,
                        background_colour,
                        font_attributes,
                        options: StringOptions::from_bits_retain(options),
                        variable_reference,
                        justification,
                        length,
                        value: variable_reference.is_null().then_some(text),
                        macros,
                    })
                }
            ),
        (object_ref(), any::<u32>(), any::<i32>(), scale(), any::<u8>()).prop_map(
            |(variable_reference, value, offset, scale, decimals)| {
                VtObject::OutputNumber(OutputNumber {
                    width: 40,
                    height: 10,
                    background_colour: Color(1),
                    font_attributes: ObjectId::NULL,
                    options: Default::default(),
                    variable_reference,
                    value,
                    offset,
                    scale,
                    number_of_decimals: decimals,
                    format: 0,
                    justification: 0,
                    macros: Vec::new(),
                })
            }
        ),
    ]
}

fn shape() -> impl Strategy<Value = VtObject> {
    prop_oneof![
        (object_ref(), any::<u16>(), any::<u16>(), any::<u8>(), macro_refs()).prop_map(
            |(line_attributes, width, height, line_direction, macros)| {
                VtObject::Line(Line {
                    line_attributes,
                    width,
                    height,
                    line_direction,
                    macros,
                })
            }
        ),
        (object_ref(), any::<u16>(), any::<u16>(), any::<u8>(), object_ref(), macro_refs()).prop_map(
            |(line_attributes, width, height, suppression, fill_attributes, macros)| {
                VtObject::Rectangle(Rectangle {
                    line_attributes,
                    width,
                    height,
                    line_suppression: LineSuppression::from_bits_retain(suppression),
                    fill_attributes,
                    macros,
                })
            }
        ),
        (object_ref(), any::<u16>(), any::<u16>(), any::<u8>(), angle(), angle(), object_ref(), macro_refs())
            .prop_map(
                |(line_attributes, width, height, ellipse_type, start_angle, end_angle, fill_attributes, macros)| {
                    VtObject::Ellipse(Ellipse {
                        line_attributes,
                        width,
                        height,
                        ellipse_type,
                        start_angle,
                        end_angle,
                        fill_attributes,
                        macros,
                    })
                }
            ),
        (
            (any::<u16>(), any::<u16>(), object_ref(), object_ref(), any::<u8>()),
            prop::collection::vec((any::<i16>(), any::<i16>()).prop_map(|(x, y)| Point::new(x, y)), 0..6),
            macro_refs(),
        )
            .prop_map(
                |((width, height, line_attributes, fill_attributes, polygon_type), points, macros)| {
                    VtObject::Polygon(Polygon {
                        width,
                        height,
                        line_attributes,
                        fill_attributes,
                        polygon_type,
                        points,
                        macros,
                    })
                }
            ),
        (
            (any::<u16>(), colour(), colour(), colour(), any::<u8>(), any::<u8>()),
            (angle(), angle(), any::<u16>(), any::<u16>(), object_ref(), any::<u16>()),
            macro_refs(),
        )
            .prop_map(
                |(
                    (width, needle_colour, border_colour, arc_and_tick_colour, options, number_of_ticks),
                    (start_angle, end_angle, min_value, max_value, variable_reference, value),
                    macros,
                )| {
                    VtObject::Meter(Meter {
                        width,
                        needle_colour,
                        border_colour,
                        arc_and_tick_colour,
                        options: MeterOptions::from_bits_retain(options),
                        number_of_ticks,
                        start_angle,
                        end_angle,
                        min_value,
                        max_value,
                        variable_reference,
                        value,
                        macros,
                    })
                }
            ),
        (
            (any::<u16>(), any::<u16>(), colour(), colour(), any::<u8>(), any::<u8>()),
            (any::<u16>(), any::<u16>(), object_ref(), any::<u16>(), object_ref(), any::<u16>()),
            macro_refs(),
        )
            .prop_map(
                |(
                    (width, height, colour, target_line_colour, options, number_of_ticks),
                    (min_value, max_value, variable_reference, value, target_value_variable_reference, target_value),
                    macros,
                )| {
                    VtObject::LinearBarGraph(LinearBarGraph {
                        width,
                        height,
                        colour,
                        target_line_colour,
                        options: LinearBarGraphOptions::from_bits_retain(options),
                        number_of_ticks,
                        min_value,
                        max_value,
                        variable_reference,
                        value,
                        target_value_variable_reference,
                        target_value,
                        macros,
                    })
                }
            ),
        (
            (any::<u16>(), any::<u16>(), colour(), colour(), any::<u8>()),
            (angle(), angle(), any::<u16>(), any::<u16>(), any::<u16>()),
            (object_ref(), any::<u16>(), object_ref(), any::<u16>(), macro_refs()),
        )
            .prop_map(
                |(
                    (width, height, colour, target_line_colour, options),
                    (start_angle, end_angle, bar_graph_width, min_value, max_value),
                    (variable_reference, value, target_value_variable_reference, target_value, macros),
                )| {
                    VtObject::ArchedBarGraph(ArchedBarGraph {
                        width,
                        height,
                        colour,
                        target_line_colour,
                        options: ArchedBarGraphOptions::from_bits_retain(options),
                        start_angle,
                        end_angle,
                        bar_graph_width,
                        min_value,
                        max_value,
                        variable_reference,
                        value,
                        target_value_variable_reference,
                        target_value,
                        macros,
                    })
                }
            ),
        picture(),
    ]
}

/// Pictures whose data exactly fills their raster, so they decode
fn picture() -> impl Strategy<Value = VtObject> {
    (
        prop_oneof![
            Just(PictureFormat::Monochrome),
            Just(PictureFormat::FourBit),
            Just(PictureFormat::EightBit),
        ],
        0u16..20,
        0u16..4,
        any::<u16>(),
        any::<bool>(),
        colour(),
        macro_refs(),
    )
        .prop_flat_map(|(format, actual_width, actual_height, width, flashing, transparency_colour, macros)| {
            let stride = match format {
                PictureFormat::FourBit => (actual_width as usize).div_ceil(2),
                PictureFormat::EightBit => actual_width as usize,
                _ => (actual_width as usize).div_ceil(8),
            };
            let len = stride * actual_height as usize;
            prop::collection::vec(any::<u8>(), len..=len).prop_map(move |data| {
                let options = if flashing {
                    PictureOptions::FLASHING
                } else {
                    PictureOptions::empty()
                };
                VtObject::PictureGraphic(PictureGraphic {
                    width,
                    actual_width,
                    actual_height,
                    format,
                    options,
                    transparency_colour,
                    data,
                    macros: macros.clone(),
                })
            })
        })
}

fn attribute() -> impl Strategy<Value = VtObject> {
    prop_oneof![
        any::<u32>().prop_map(|value| VtObject::NumberVariable(NumberVariable { value })),
        text().prop_map(|value| VtObject::StringVariable(StringVariable {
            length: value.chars().count() as u16,
            value,
        })),
        (colour(), any::<u8>(), any::<u8>(), any::<u8>(), macro_refs()).prop_map(
            |(font_colour, font_size, font_type, style, macros)| {
                VtObject::FontAttributes(FontAttributes {
                    font_colour,
                    font_size,
                    font_type,
                    font_style: FontStyle::from_bits_retain(style),
                    macros,
                })
            }
        ),
        (colour(), any::<u8>(), any::<u16>(), macro_refs()).prop_map(
            |(line_colour, line_width, line_art, macros)| {
                VtObject::LineAttributes(LineAttributes {
                    line_colour,
                    line_width,
                    line_art,
                    macros,
                })
            }
        ),
        (any::<u8>(), colour(), object_ref(), macro_refs()).prop_map(
            |(fill_type, fill_colour, fill_pattern, macros)| {
                VtObject::FillAttributes(FillAttributes {
                    fill_type,
                    fill_colour,
                    fill_pattern,
                    macros,
                })
            }
        ),
        (any::<u8>(), text(), macro_refs()).prop_map(|(validation_type, validation_string, macros)| {
            VtObject::InputAttributes(InputAttributes {
                validation_type,
                length: validation_string.chars().count() as u8,
                validation_string,
                macros,
            })
        }),
        object_ref().prop_map(|value| VtObject::ObjectPointer(ObjectPointer { value })),
        prop::collection::vec(prop_oneof![command(), attribute_command()], 0..6)
            .prop_map(|commands| VtObject::Macro(Macro { commands })),
    ]
}

fn body() -> impl Strategy<Value = VtObject> {
    prop_oneof![mask(), field(), shape(), attribute()]
}

/// Bodies with ids 0, 1, 2, ...
fn pool() -> impl Strategy<Value = Vec<(u16, VtObject)>> {
    prop::collection::vec(body(), 0..12).prop_map(|bodies| {
        bodies
            .into_iter()
            .enumerate()
            .map(|(i, body)| (i as u16, body))
            .collect()
    })
}

fn entries(pool: &[(u16, VtObject)]) -> Vec<Entry> {
    pool.iter().map(|(id, body)| ("", *id, body.clone())).collect()
}

proptest! {
    #[test]
    fn prop_binary_pool_decodes_to_its_objects(pool in pool()) {
        let imported = import(InputFormat::Binary, binary_pool(&entries(&pool)));
        let decoded: Vec<(u16, VtObject)> = imported
            .objects
            .iter()
            .map(|o| (o.id.value(), o.body.clone()))
            .collect();
        prop_assert_eq!(decoded, pool);
    }

    #[test]
    fn prop_text_and_binary_agree(pool in pool()) {
        let from_iop = import(InputFormat::Binary, binary_pool(&entries(&pool)));
        let named: Vec<(String, u16, VtObject)> = from_iop
            .objects
            .iter()
            .map(|o| (o.name.clone(), o.id.value(), o.body.clone()))
            .collect();
        let from_sav = import(InputFormat::Text, sav_pool(&named));
        prop_assert_eq!(
            from_iop.document.to_xml_string().unwrap(),
            from_sav.document.to_xml_string().unwrap()
        );
    }

    #[test]
    fn prop_text_dword_range_checked(value in (u32::MAX as u64 + 1)..=u64::MAX) {
        let text = format!("v\ndesc ID 1 TYPE 21 DWORD {value}\n");
        let err = PoolImporter::from_bytes(InputFormat::Text, text.into_bytes())
            .import()
            .unwrap_err();
        let is_range_error = matches!(err, PoolError::ValueOutOfRange { keyword: "DWORD", .. });
        prop_assert!(is_range_error);
    }

    #[test]
    fn prop_text_byte_range_checked(value in 256u64..100_000) {
        let text = format!("l\ndesc ID 1 TYPE 24 COLOR 0 BYTE {value} WORD 0 BYTE 0\n");
        let err = PoolImporter::from_bytes(InputFormat::Text, text.into_bytes())
            .import()
            .unwrap_err();
        let is_range_error = matches!(err, PoolError::ValueOutOfRange { keyword: "BYTE", .. });
        prop_assert!(is_range_error);
    }

    #[test]
    fn prop_unique_name_is_unused(
        declared in "[A-Za-z]{0,4}[0-9]{0,2}",
        used in prop::collection::hash_set("[A-Za-z]{1,4}[0-9]{0,2}", 0..20),
    ) {
        let name = create_unique_name(&declared, "container", |n| used.contains(n));
        prop_assert!(!used.contains(&name));
        prop_assert!(!name.is_empty());
        if !declared.is_empty() && !used.contains(&declared) {
            prop_assert_eq!(name, declared);
        }
    }
}
