mod common;

use apisig::{Error, SignatureError};
use common::{api, check, try_api};
use indoc::indoc;

#[test]
fn test_classes() {
    check(
        indoc! {"
            export class A {
              field:string;

              method(a:string):number {
                return 1;
              }
            }
        "},
        &["class A", "A.field:string", "A.method(string):number"],
    );
}

#[test]
fn test_interfaces() {
    check(
        indoc! {"
            export interface A {
              field:string;
              method(a:string):number;
            }
        "},
        &["interface A", "A.field:string", "A.method(string):number"],
    );
}

#[test]
fn test_generics() {
    check(
        indoc! {"
            export class A<T> {
              field:T;
              method(q:T):T { return null; }
            }
        "},
        &["class A<T>", "A.field:T", "A.method(T):T"],
    );
}

#[test]
fn test_multiple_type_parameters_have_no_space() {
    check(
        "export interface Pair<K, V> { key: K; value: V; }",
        &["interface Pair<K,V>", "Pair.key:K", "Pair.value:V"],
    );
}

#[test]
fn test_static_members() {
    check(
        indoc! {"
            export class A {
              static field: string;
              static method(a: string): number {}
            }
        "},
        &["class A", "A.field:string", "A.method(string):number"],
    );
}

#[test]
fn test_arrays() {
    check(
        indoc! {"
            export var a: Array<Array<string>>;
            export var b: string[][];
        "},
        &["var a:Array<Array<string>>", "var b:string[][]"],
    );
}

#[test]
fn test_map() {
    check(
        "export var a: Map<Map<string, number>, number>;",
        &["var a:Map<Map<string, number>, number>"],
    );
}

#[test]
fn test_getters_and_setters() {
    check(
        indoc! {"
            export class A {
              get a(): string {}
              set a(v:string){}
              get b() {}
              set b(v) {}
            }
        "},
        &["class A", "A.a:string", "A.a=(string)", "A.b:any", "A.b=(any)"],
    );
}

#[test]
fn test_function_declarations() {
    check(
        "export function f(a:string):number {}",
        &["f(string):number"],
    );
}

#[test]
fn test_function_without_annotations() {
    check("export function g(a, b) {}", &["g(any, any):any"]);
}

#[test]
fn test_enums() {
    check(
        indoc! {"
            export enum A {
              Red = 1,
              Green
            }
        "},
        &["enum A", "A.Red", "A.Green"],
    );
}

#[test]
fn test_private_methods_are_skipped() {
    check(
        indoc! {"
            export class A {
              fa(){}
              protected fb() {}
              private fc() {}
            }
        "},
        &["class A", "A.fa():any", "A.fb():any"],
    );
}

#[test]
fn test_private_props_are_skipped() {
    check(
        indoc! {"
            export class A {
              fa;
              protected fb;
              private fc;
            }
        "},
        &["class A", "A.fa:any", "A.fb:any"],
    );
}

#[test]
fn test_underscore_members_are_skipped() {
    check(
        indoc! {"
            export class A {
              _fa;
              _fb(){}
            }
        "},
        &["class A"],
    );
}

#[test]
fn test_interface_members_are_never_filtered() {
    check(
        "export interface I { _hidden: string; }",
        &["interface I", "I._hidden:string"],
    );
}

#[test]
fn test_variables() {
    check(
        indoc! {"
            export const A: string = 'a';
            export let B;
            export var C: number, D;
        "},
        &["const A:string", "var B", "var C:number", "var D"],
    );
}

#[test]
fn test_unions_and_qualified_names() {
    check(
        indoc! {"
            export var u: string | number | boolean;
            export var q: ns.Inner;
        "},
        &["var u:string|number|boolean", "var q:Inner"],
    );
}

#[test]
fn test_type_literals() {
    check(
        indoc! {"
            export var m: {[key: string]: number};
            export var o: {a: string};
        "},
        &["var m:Map<string,number>", "var o:dynamic"],
    );
}

#[test]
fn test_function_types_keep_source_text() {
    check(
        "export var cb: (a: string) => void;",
        &["var cb:(a: string) => void"],
    );
}

#[test]
fn test_unrecognized_types_render_unknown() {
    check(
        indoc! {"
            export var t: [string, number];
            export var n: never;
        "},
        &["var t:unknown", "var n:unknown"],
    );
}

#[test]
fn test_only_exported_declarations() {
    check(
        indoc! {"
            const hidden = 1;
            class Internal {}
            export class Visible {}
        "},
        &["class Visible"],
    );
}

#[test]
fn test_export_clause() {
    check(
        indoc! {"
            const A: string = 'a';
            var B;
            export { A, B };
        "},
        &["const A:string", "var B"],
    );
}

#[test]
fn test_classes_and_interfaces_together() {
    check(
        indoc! {"
            export class A {
              field: string;
              method(a: string): number { return 1; }
            }
            export interface B {
              field: A;
            }
        "},
        &[
            "class A",
            "A.field:string",
            "A.method(string):number",
            "interface B",
            "B.field:A",
        ],
    );
}

#[test]
fn test_empty_file() {
    assert!(api("").is_empty());
}

#[test]
fn test_malformed_member_name_is_fatal() {
    let err = try_api("export class A {\n  #secret: string;\n}\n").unwrap_err();
    match err {
        Error::Signature(SignatureError::MalformedName { location, message }) => {
            assert_eq!(location.line, 2);
            assert_eq!(location.column, 3);
            assert_eq!(message, "Invalid node type");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_malformed_variable_name_message() {
    let err = try_api("export const {a} = obj;").unwrap_err();
    assert_eq!(err.to_string(), "file.ts:1:14: Invalid node type");
}

#[test]
fn test_malformed_name_is_reported_at_the_member_start() {
    let err = try_api("export class A {\n  static [k]() {}\n}\n").unwrap_err();
    assert_eq!(err.to_string(), "file.ts:2:3: Invalid node type");

    let err = try_api("export class A {\n  private 'q': string;\n}\n").unwrap_err();
    assert_eq!(err.to_string(), "file.ts:2:3: Invalid node type");
}
