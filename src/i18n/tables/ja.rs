// SPDX-License-Identifier: PMPL-1.0-or-later

//! Japanese.

use crate::keys::*;

pub(crate) const TABLE: &[(&str, &str)] = &[
    // Errors
    (ER_CURRENT_NOT_ALLOWED_IN_MATCH, "current() 関数はマッチング・パターンでは許可されません。"),
    (ER_CURRENT_TAKES_NO_ARGS, "current() 関数は引数を受け入れません。"),
    (ER_DOCUMENT_REPLACED, "document() 関数の実装は org.apache.xalan.xslt.FuncDocument に置き換えられました。"),
    (ER_CONTEXT_HAS_NO_OWNERDOC, "コンテキストには所有者文書がありません。"),
    (ER_LOCALNAME_HAS_TOO_MANY_ARGS, "local-name() の引数が多すぎます。"),
    (ER_NAMESPACEURI_HAS_TOO_MANY_ARGS, "namespace-uri() の引数が多すぎます。"),
    (ER_NORMALIZESPACE_HAS_TOO_MANY_ARGS, "normalize-space() の引数が多すぎます。"),
    (ER_NUMBER_HAS_TOO_MANY_ARGS, "number() の引数が多すぎます。"),
    (ER_NAME_HAS_TOO_MANY_ARGS, "name() の引数が多すぎます。"),
    (ER_STRING_HAS_TOO_MANY_ARGS, "string() の引数が多すぎます。"),
    (ER_STRINGLENGTH_HAS_TOO_MANY_ARGS, "string-length() の引数が多すぎます。"),
    (ER_TRANSLATE_TAKES_3_ARGS, "translate() 関数には 3 つの引数が必要です。"),
    (ER_UNPARSEDENTITYURI_TAKES_1_ARG, "unparsed-entity-uri 関数には 1 つの引数が必要です。"),
    (ER_NAMESPACEAXIS_NOT_IMPLEMENTED, "名前空間軸はまだ実装されていません。"),
    (ER_UNKNOWN_AXIS, "不明な軸: {0}"),
    (ER_UNKNOWN_MATCH_OPERATION, "不明なマッチング操作です。"),
    (ER_INCORRECT_ARG_LENGTH, "processing-instruction() ノード・テストの引数の長さが正しくありません。"),
    (ER_CANT_CONVERT_TO_NUMBER, "{0} を数値に変換できません"),
    (ER_CANT_CONVERT_TO_NODELIST, "{0} を NodeList に変換できません。"),
    (ER_CANT_CONVERT_TO_MUTABLENODELIST, "{0} を NodeSetDTM に変換できません。"),
    (ER_CANT_CONVERT_TO_TYPE, "{0} を type#{1} に変換できません"),
    (ER_EXPECTED_MATCH_PATTERN, "getMatchScore にはマッチング・パターンが必要です。"),
    (ER_COULDNOT_GET_VAR_NAMED, "{0} という名前の変数を取得できませんでした"),
    (ER_UNKNOWN_OPCODE, "エラー。不明な操作コード: {0}"),
    (ER_EXTRA_ILLEGAL_TOKENS, "余分な不正トークン: {0}"),
    (ER_EXPECTED_DOUBLE_QUOTE, "リテラルの引用符が誤っています... 二重引用符が必要です。"),
    (ER_EXPECTED_SINGLE_QUOTE, "リテラルの引用符が誤っています... 単一引用符が必要です。"),
    (ER_EMPTY_EXPRESSION, "式が空です。"),
    (ER_EXPECTED_BUT_FOUND, "{0} が必要ですが、{1} が見つかりました"),
    (ER_INCORRECT_PROGRAMMER_ASSERTION, "プログラマーのアサーションが正しくありません。 - {0}"),
    (ER_BOOLEAN_ARG_NO_LONGER_OPTIONAL, "19990709 XPath ドラフトでは、boolean(...) の引数はオプションではなくなりました。"),
    (ER_FOUND_COMMA_BUT_NO_PRECEDING_ARG, "',' が見つかりましたが、先行する引数がありません。"),
    (ER_FOUND_COMMA_BUT_NO_FOLLOWING_ARG, "',' が見つかりましたが、後続の引数がありません。"),
    (ER_PREDICATE_ILLEGAL_SYNTAX, "'..[述部]' または '.[述部]' は不正な構文です。代わりに 'self::node()[述部]' を使用してください。"),
    (ER_ILLEGAL_AXIS_NAME, "不正な軸名: {0}"),
    (ER_UNKNOWN_NODETYPE, "不明なノード・タイプ: {0}"),
    (ER_PATTERN_LITERAL_NEEDS_BE_QUOTED, "パターン・リテラル ({0}) は引用符で囲む必要があります。"),
    (ER_COULDNOT_BE_FORMATTED_TO_NUMBER, "{0} を数値にフォーマット設定できませんでした。"),
    (ER_COULDNOT_CREATE_XMLPROCESSORLIAISON, "XML TransformerFactory Liaison を作成できませんでした: {0}"),
    (ER_DIDNOT_FIND_XPATH_SELECT_EXP, "エラー。xpath 選択式 (-select) が見つかりませんでした。"),
    (ER_COULDNOT_FIND_ENDOP_AFTER_OPLOCATIONPATH, "エラー。OP_LOCATIONPATH の後に ENDOP が見つかりませんでした"),
    (ER_ERROR_OCCURED, "エラーが発生しました。"),
    (ER_ILLEGAL_VARIABLE_REFERENCE, "コンテキスト外または定義のない変数に VariableReference が指定されました。 名前 = {0}"),
    (ER_AXES_NOT_ALLOWED, "マッチング・パターンでは child:: 軸と attribute:: 軸のみが許可されます。 問題のある軸 = {0}"),
    (ER_KEY_HAS_TOO_MANY_ARGS, "key() の引数の数が正しくありません。"),
    (ER_COUNT_TAKES_1_ARG, "count 関数には 1 つの引数が必要です。"),
    (ER_COULDNOT_FIND_FUNCTION, "関数が見つかりませんでした: {0}"),
    (ER_UNSUPPORTED_ENCODING, "サポートされないエンコード: {0}"),
    (ER_PROBLEM_IN_DTM_NEXTSIBLING, "getNextSibling で DTM に問題が発生しました... 回復を試みています"),
    (ER_CANNOT_WRITE_TO_EMPTYNODELISTIMPL, "プログラマー・エラー: EmptyNodeList には書き込めません。"),
    (ER_SETDOMFACTORY_NOT_SUPPORTED, "setDOMFactory は XPathContext ではサポートされません。"),
    (ER_PREFIX_MUST_RESOLVE, "接頭部は名前空間に解決される必要があります: {0}"),
    (ER_PARSE_NOT_SUPPORTED, "parse (InputSource source) は XPathContext ではサポートされません。 {0} をオープンできません"),
    (ER_SAX_API_NOT_HANDLED, "SAX API characters(char ch[]... は DTM によって処理されません。"),
    (ER_IGNORABLE_WHITESPACE_NOT_HANDLED, "ignorableWhitespace(char ch[]... は DTM によって処理されません。"),
    (ER_DTM_CANNOT_HANDLE_NODES, "DTMLiaison はタイプ {0} のノードを処理できません"),
    (ER_XERCES_CANNOT_HANDLE_NODES, "DOM2Helper はタイプ {0} のノードを処理できません"),
    (ER_XERCES_PARSE_ERROR_DETAILS, "DOM2Helper.parse エラー: SystemID - {0} 行 - {1}"),
    (ER_XERCES_PARSE_ERROR, "DOM2Helper.parse エラー"),
    (ER_INVALID_UTF16_SURROGATE, "無効な UTF-16 サロゲートが検出されました: {0} ?"),
    (ER_OIERROR, "入出力エラー"),
    (ER_CANNOT_CREATE_URL, "{0} の URL を作成できません"),
    (ER_XPATH_READOBJECT, "XPath.readObject 内: {0}"),
    (ER_FUNCTION_TOKEN_NOT_FOUND, "関数トークンが見つかりません。"),
    (ER_CANNOT_DEAL_XPATH_TYPE, "XPath タイプを処理できません: {0}"),
    (ER_NODESET_NOT_MUTABLE, "この NodeSet は可変ではありません"),
    (ER_NODESETDTM_NOT_MUTABLE, "この NodeSetDTM は可変ではありません"),
    (ER_VAR_NOT_RESOLVABLE, "変数を解決できません: {0}"),
    (ER_NULL_ERROR_HANDLER, "エラー・ハンドラーがヌルです"),
    (ER_PROG_ASSERT_UNKNOWN_OPCODE, "プログラマーのアサーション: 不明な操作コード: {0}"),
    (ER_ZERO_OR_ONE, "0 または 1"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "rtf() は XRTreeFragSelectWrapper ではサポートされません"),
    (ER_RTF_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "asNodeIterator() は XRTreeFragSelectWrapper ではサポートされません"),
    (ER_DETACH_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "detach() は XRTreeFragSelectWrapper ではサポートされません"),
    (ER_NUM_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "num() は XRTreeFragSelectWrapper ではサポートされません"),
    (ER_XSTR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "xstr() は XRTreeFragSelectWrapper ではサポートされません"),
    (ER_STR_NOT_SUPPORTED_XRTREEFRAGSELECTWRAPPER, "str() は XRTreeFragSelectWrapper ではサポートされません"),
    (ER_FSB_NOT_SUPPORTED_XSTRINGFORCHARS, "fsb() は XStringForChars ではサポートされません"),
    (ER_COULD_NOT_FIND_VAR, "{0} という名前の変数が見つかりませんでした"),
    (ER_XSTRINGFORCHARS_CANNOT_TAKE_STRING, "XStringForChars は引数にストリングを使用できません"),
    (ER_FASTSTRINGBUFFER_CANNOT_BE_NULL, "FastStringBuffer 引数はヌルにできません"),
    (ER_TWO_OR_THREE, "2 または 3"),
    (ER_VARIABLE_ACCESSED_BEFORE_BIND, "変数はバインドされる前にアクセスされました。"),
    (ER_FSB_CANNOT_TAKE_STRING, "XStringForFSB は引数にストリングを使用できません。"),
    (ER_SETTING_WALKER_ROOT_TO_NULL, "\n !!!! エラー。walker のルートをヌルに設定しています。!!!"),
    (ER_NODESETDTM_CANNOT_ITERATE, "この NodeSetDTM は前のノードに反復できません。"),
    (ER_NODESET_CANNOT_ITERATE, "この NodeSet は前のノードに反復できません。"),
    (ER_NODESETDTM_CANNOT_INDEX, "この NodeSetDTM は索引付けまたはカウント機能を実行できません。"),
    (ER_NODESET_CANNOT_INDEX, "この NodeSet は索引付けまたはカウント機能を実行できません。"),
    (ER_CANNOT_CALL_SETSHOULDCACHENODE, "nextNode が呼び出された後に setShouldCacheNodes を呼び出すことはできません。"),
    (ER_ONLY_ALLOWS, "{0} で許可される引数は {1} 個のみです"),
    (ER_UNKNOWN_STEP, "getNextStepPos でのプログラマーのアサーション: 不明な stepType: {0}"),
    (ER_EXPECTED_REL_LOC_PATH, "'/' トークンまたは '//' トークンの後には相対ロケーション・パスが必要です。"),
    (ER_EXPECTED_LOC_PATH, "ロケーション・パスが必要ですが、代わりに XPath 式の終わりが見つかりました。"),
    (ER_EXPECTED_LOC_STEP, "'/' トークンまたは '//' トークンの後にはロケーション・ステップが必要です。"),
    (ER_EXPECTED_NODE_TEST, "NCName:* または QName のいずれかと一致するノード・テストが必要です。"),
    (ER_EXPECTED_STEP_PATTERN, "ステップ・パターンが必要ですが、'/' が検出されました。"),
    (ER_EXPECTED_REL_PATH_PATTERN, "相対パス・パターンが必要です。"),
    (ER_CANT_CONVERT_TO_BOOLEAN, "XPath 式 ''{0}'' の XPathResult の XPathResultType は {1} で、ブール値に変換できません。"),
    (ER_CANT_CONVERT_TO_SINGLENODE, "XPath 式 ''{0}'' の XPathResult の XPathResultType は {1} で、単一ノードに変換できません。getSingleNodeValue メソッドはタイプ ANY_UNORDERED_NODE_TYPE および FIRST_ORDERED_NODE_TYPE にのみ適用されます。"),
    (ER_CANT_GET_SNAPSHOT_LENGTH, "XPathResultType が {1} であるため、XPath 式 ''{0}'' の XPathResult に対して getSnapshotLength メソッドを呼び出すことはできません。このメソッドはタイプ UNORDERED_NODE_SNAPSHOT_TYPE および ORDERED_NODE_SNAPSHOT_TYPE にのみ適用されます。"),
    (ER_NON_ITERATOR_TYPE, "XPathResultType が {1} であるため、XPath 式 ''{0}'' の XPathResult に対して iterateNext メソッドを呼び出すことはできません。このメソッドはタイプ UNORDERED_NODE_ITERATOR_TYPE および ORDERED_NODE_ITERATOR_TYPE にのみ適用されます。"),
    (ER_DOC_MUTATED, "結果が戻されてから文書が変更されました。イテレーターは無効です。"),
    (ER_INVALID_XPATH_TYPE, "無効な XPath タイプ引数: {0}"),
    (ER_EMPTY_XPATH_RESULT, "空の XPath 結果オブジェクト"),
    (ER_INCOMPATIBLE_TYPES, "XPath 式 ''{0}'' の XPathResult の XPathResultType は {1} で、指定された XPathResultType {2} に強制変換できません。"),
    (ER_NULL_RESOLVER, "ヌルの接頭部リゾルバーでは接頭部を解決できません。"),
    (ER_CANT_CONVERT_TO_STRING, "XPath 式 ''{0}'' の XPathResult の XPathResultType は {1} で、ストリングに変換できません。"),
    (ER_NON_SNAPSHOT_TYPE, "XPathResultType が {1} であるため、XPath 式 ''{0}'' の XPathResult に対して snapshotItem メソッドを呼び出すことはできません。このメソッドはタイプ UNORDERED_NODE_SNAPSHOT_TYPE および ORDERED_NODE_SNAPSHOT_TYPE にのみ適用されます。"),
    (ER_WRONG_DOCUMENT, "コンテキスト・ノードは、この XPathEvaluator にバインドされた文書に属していません。"),
    (ER_WRONG_NODETYPE, "コンテキスト・ノード・タイプはサポートされません。"),
    (ER_XPATH_ERROR, "XPath で不明なエラーが発生しました。"),
    (ER_CANT_CONVERT_XPATHRESULTTYPE_TO_NUMBER, "XPath 式 ''{0}'' の XPathResult の XPathResultType は {1} で、数値に変換できません"),
    (ER_EXTENSION_FUNCTION_CANNOT_BE_INVOKED, "XMLConstants.FEATURE_SECURE_PROCESSING フィーチャーが true に設定されているときは、拡張関数 ''{0}'' を呼び出せません。"),
    (ER_RESOLVE_VARIABLE_RETURNS_NULL, "変数 {0} の resolveVariable がヌルを戻しています"),
    (ER_UNSUPPORTED_RETURN_TYPE, "サポートされない戻りの型: {0}"),
    (ER_SOURCE_RETURN_TYPE_CANNOT_BE_NULL, "ソースおよび戻りの型の両方またはいずれかをヌルにすることはできません"),
    (ER_ARG_CANNOT_BE_NULL, "{0} 引数はヌルにできません"),
    (ER_OBJECT_MODEL_NULL, "{0}#isObjectModelSupported( String objectModel ) は objectModel == null で呼び出せません"),
    (ER_OBJECT_MODEL_EMPTY, "{0}#isObjectModelSupported( String objectModel ) は objectModel == \"\" で呼び出せません"),
    (ER_FEATURE_NAME_NULL, "ヌル名でフィーチャーを設定しようとしました: {0}#setFeature( null, {1})"),
    (ER_FEATURE_UNKNOWN, "不明なフィーチャー \"{0}\" を設定しようとしました:{1}#setFeature({0},{2})"),
    (ER_GETTING_NULL_FEATURE, "ヌル名でフィーチャーを取得しようとしました: {0}#getFeature(null)"),
    (ER_GETTING_UNKNOWN_FEATURE, "不明なフィーチャー \"{0}\" を取得しようとしました:{1}#getFeature({0})"),
    (ER_NULL_XPATH_FUNCTION_RESOLVER, "ヌルの XPathFunctionResolver を設定しようとしました:{0}#setXPathFunctionResolver(null)"),
    (ER_NULL_XPATH_VARIABLE_RESOLVER, "ヌルの XPathVariableResolver を設定しようとしました:{0}#setXPathVariableResolver(null)"),
    // Warnings
    (WG_LOCALE_NAME_NOT_HANDLED, "format-number 関数のロケール名はまだ処理されません。"),
    (WG_PROPERTY_NOT_SUPPORTED, "XSL プロパティーはサポートされません: {0}"),
    (WG_DONT_DO_ANYTHING_WITH_NS, "プロパティー {1} の名前空間 {0} に対しては現在何も行いません"),
    (WG_SECURITY_EXCEPTION, "XSL システム・プロパティーへのアクセス時に SecurityException が発生しました: {0}"),
    (WG_QUO_NO_LONGER_DEFINED, "古い構文: quo(...) は XPath ではもう定義されていません。"),
    (WG_NEED_DERIVED_OBJECT_TO_IMPLEMENT_NODETEST, "XPath で nodeTest を実装するには派生オブジェクトが必要です。"),
    (WG_FUNCTION_TOKEN_NOT_FOUND, "関数トークンが見つかりません。"),
    (WG_COULDNOT_FIND_FUNCTION, "関数が見つかりませんでした: {0}"),
    (WG_CANNOT_MAKE_URL_FROM, "{0} から URL を作成できません"),
    (WG_EXPAND_ENTITIES_NOT_SUPPORTED, "-E オプションは DTM パーサーではサポートされません"),
    (WG_ILLEGAL_VARIABLE_REFERENCE, "コンテキスト外または定義のない変数に VariableReference が指定されました。 名前 = {0}"),
    (WG_UNSUPPORTED_ENCODING, "サポートされないエンコード: {0}"),
    // UI strings
    (UI_LANGUAGE, "ja"),
    (HELP_LANGUAGE, "ja"),
    (LANGUAGE, "ja"),
    (BAD_CODE, "createMessage のパラメーターが範囲外です"),
    (FORMAT_FAILED, "messageFormat 呼び出し中に例外がスローされました"),
    (VERSION, ">>>>>>> Xalan バージョン "),
    (VERSION2, "<<<<<<<"),
    (YES, "はい"),
    (LINE, "行番号"),
    (COLUMN, "列番号"),
    (XSLDONE, "XSLProcessor: 完了"),
    (XPATH_OPTION, "xpath オプション: "),
    (OPTION_IN, "   [-in inputXMLURL]"),
    (OPTION_SELECT, "   [-select xpath 式]"),
    (OPTION_MATCH, "   [-match マッチング・パターン (マッチング診断用)]"),
    (OPTION_ANY_EXPR, "または xpath 式のみで診断ダンプを実行します"),
    (NO_PARSER_MSG1, "XSL 処理は正常に実行されませんでした。"),
    (NO_PARSER_MSG2, "** パーサーが見つかりませんでした **"),
    (NO_PARSER_MSG3, "クラスパスを確認してください。"),
    (NO_PARSER_MSG4, "IBM の XML Parser for Java がない場合は、次のサイトからダウンロードできます"),
    (NO_PARSER_MSG5, "IBM AlphaWorks: http://www.alphaworks.ibm.com/formula/xml"),
    (GTONE, ">1"),
    (ZERO, "0"),
    (ONE, "1"),
    (TWO, "2"),
    (THREE, "3"),
    (ERROR_HEADER, "エラー: "),
    (WARNING_HEADER, "警告: "),
    (XSL_HEADER, "XSL "),
    (XML_HEADER, "XML "),
    (QUERY_HEADER, "パターン "),
];
