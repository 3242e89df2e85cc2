//! Merge results of the default configuration for well known class lists

use tw_merge::tw_merge;

fn check(cases: &[(&str, &str)]) {
    let mut failures = Vec::new();
    for (input, expected) in cases {
        let actual = tw_merge(input);
        if actual != *expected {
            failures.push(format!("{:?}: expected {:?}, got {:?}", input, expected, actual));
        }
    }
    assert!(failures.is_empty(), "{} mismatches:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn test_arbitrary_properties() {
    check(&[
        ("[paint-order:markers] [paint-order:normal]", "[paint-order:normal]"),
        (
            "[paint-order:markers] [--my-var:2rem] [paint-order:normal] [--my-var:4px]",
            "[paint-order:normal] [--my-var:4px]",
        ),
        ("[paint-order:markers] hover:[paint-order:normal]", "[paint-order:markers] hover:[paint-order:normal]"),
        ("hover:[paint-order:markers] hover:[paint-order:normal]", "hover:[paint-order:normal]"),
        ("[&>*]:[color:red] [&>*]:[color:blue]", "[&>*]:[color:blue]"),
    ]);
}

#[test]
fn test_arbitrary_values() {
    check(&[
        ("m-[2px] m-[10px]", "m-[10px]"),
        ("z-20 z-[99]", "z-[99]"),
        ("my-[2px] m-[10rem]", "m-[10rem]"),
        ("cursor-pointer cursor-[grab]", "cursor-[grab]"),
        ("m-[2px] m-[length:var(--mystery-var)]", "m-[length:var(--mystery-var)]"),
        ("opacity-10 opacity-[0.025]", "opacity-[0.025]"),
        ("scale-75 scale-[1.7]", "scale-[1.7]"),
        ("brightness-90 brightness-[1.75]", "brightness-[1.75]"),
        ("min-h-[0.5px] min-h-[0]", "min-h-[0]"),
        ("text-[0.5px] text-[color:0]", "text-[0.5px] text-[color:0]"),
        ("text-[0.5px] text-(--my-0)", "text-[0.5px] text-(--my-0)"),
        ("hover:m-[2px] hover:m-[length:var(--c)]", "hover:m-[length:var(--c)]"),
        ("grid-rows-[1fr,auto] grid-rows-2", "grid-rows-2"),
        ("mt-2 mt-[theme(someScale.someValue)]", "mt-[theme(someScale.someValue)]"),
        ("stroke-2 stroke-[3]", "stroke-[3]"),
        ("grayscale-0 grayscale-[50%]", "grayscale-[50%]"),
        ("grow grow-[2]", "grow-[2]"),
        ("from-[#ff0000] from-[#0000ff]", "from-[#0000ff]"),
        ("ring-[3px] ring-0", "ring-0"),
        ("ring-[3px] ring-red-500", "ring-[3px] ring-red-500"),
        ("outline-[3px] outline-red-500", "outline-[3px] outline-red-500"),
        ("translate-x-[10px] translate-x-[20px]", "translate-x-[20px]"),
        ("content-none content-['hello']", "content-['hello']"),
    ]);
}

#[test]
fn test_arbitrary_variants() {
    check(&[
        ("[p]:underline [p]:line-through", "[p]:line-through"),
        ("[&>*]:underline [&>*]:line-through", "[&>*]:line-through"),
        ("supports-[display:grid]:grid supports-[display:grid]:flex", "supports-[display:grid]:flex"),
        (
            "supports-[display:grid]:grid supports-[display:flex]:flex",
            "supports-[display:grid]:grid supports-[display:flex]:flex",
        ),
        ("has-[>img]:p-2 has-[>img]:p-4", "has-[>img]:p-4"),
        ("data-[state=open]:bg-red-500 data-[state=open]:bg-blue-500", "data-[state=open]:bg-blue-500"),
        (
            "data-[state=open]:bg-red-500 data-[state=closed]:bg-blue-500",
            "data-[state=open]:bg-red-500 data-[state=closed]:bg-blue-500",
        ),
    ]);
}

#[test]
fn test_class_group_conflicts() {
    check(&[
        ("overflow-x-auto overflow-x-hidden", "overflow-x-hidden"),
        ("basis-full basis-auto", "basis-auto"),
        ("w-full w-fit", "w-fit"),
        ("overflow-x-auto overflow-x-hidden overflow-x-scroll", "overflow-x-scroll"),
        ("col-span-1 col-span-full", "col-span-full"),
        ("gap-2 gap-px basis-px basis-3", "gap-px basis-3"),
        ("tabular-nums diagonal-fractions normal-nums", "normal-nums"),
        ("tabular-nums proportional-nums", "proportional-nums"),
        ("inset-1 inset-x-1", "inset-1 inset-x-1"),
        ("inset-x-1 inset-1", "inset-1"),
        ("inset-x-1 left-1 inset-1", "inset-1"),
        ("inset-x-1 inset-1 left-1", "inset-1 left-1"),
        ("inset-x-1 right-1 inset-1", "inset-1"),
        ("inset-x-1 right-1 inset-x-1", "inset-x-1"),
        ("inset-x-1 right-1 inset-y-1", "inset-x-1 right-1 inset-y-1"),
        ("right-1 inset-x-1 inset-y-1", "inset-x-1 inset-y-1"),
        ("inset-x-1 hover:left-1 inset-1", "hover:left-1 inset-1"),
        ("ring shadow", "ring shadow"),
        ("ring-2 shadow-md", "ring-2 shadow-md"),
        ("shadow ring", "shadow ring"),
        ("shadow-md ring-2", "shadow-md ring-2"),
        ("touch-pan-x touch-pan-right", "touch-pan-right"),
        ("touch-none touch-pan-x", "touch-pan-x"),
        ("touch-pan-x touch-none", "touch-none"),
        ("touch-pan-x touch-pan-y touch-pinch-zoom", "touch-pan-x touch-pan-y touch-pinch-zoom"),
        ("touch-pan-x touch-pan-y touch-pinch-zoom touch-auto", "touch-auto"),
        ("overflow-auto inline line-clamp-1", "line-clamp-1"),
        ("line-clamp-1 overflow-auto inline", "line-clamp-1 overflow-auto inline"),
        ("w-5 h-3 size-10 w-12", "size-10 w-12"),
        ("col-span-full col-2 row-span-3 row-4", "col-2 row-4"),
    ]);
}

#[test]
fn test_logical_properties() {
    check(&[
        ("ms-2 ms-4", "ms-4"),
        ("ms-2 me-4", "ms-2 me-4"),
        ("ms-2 ml-4", "ms-2 ml-4"),
        ("mx-2 mx-4", "mx-4"),
        ("ps-2 pe-4", "ps-2 pe-4"),
        ("start-0 left-4", "start-0 left-4"),
        ("border-s border-s-2", "border-s-2"),
        ("border-s-2 border-e-4", "border-s-2 border-e-4"),
        ("border-s-red-500 border-s-blue-500", "border-s-blue-500"),
        ("border-s-2 border-l-4", "border-s-2 border-l-4"),
        ("scroll-ms-4 scroll-mx-8", "scroll-ms-4 scroll-mx-8"),
        ("scroll-ms-4 scroll-m-8", "scroll-m-8"),
    ]);
}

#[test]
fn test_borders_and_radius() {
    check(&[
        ("border-t border-white/10", "border-t border-white/10"),
        ("border-t border-white", "border-t border-white"),
        ("border-t-some-blue border-t-other-blue", "border-t-other-blue"),
        ("border-t-some-blue border-some-blue", "border-some-blue"),
        ("border-some-blue border-s-some-blue", "border-some-blue border-s-some-blue"),
        ("border-e-some-blue border-some-blue", "border-some-blue"),
        ("border-solid border-dashed", "border-dashed"),
        ("border-solid border-2", "border-solid border-2"),
        ("border-collapse border-separate", "border-separate"),
        ("border-spacing-x-2 border-spacing-4", "border-spacing-4"),
        ("rounded-sm rounded-lg", "rounded-lg"),
        ("rounded-t-sm rounded-lg", "rounded-lg"),
        ("rounded-lg rounded-t-sm", "rounded-lg rounded-t-sm"),
        ("rounded-tl-sm rounded-t-lg", "rounded-t-lg"),
        ("rounded-ss-sm rounded-s-lg", "rounded-s-lg"),
        ("rounded-tl-sm rounded-tr-md rounded-t-lg", "rounded-t-lg"),
        ("rounded rounded-md", "rounded-md"),
        ("hover:rounded-sm focus:rounded-lg", "hover:rounded-sm focus:rounded-lg"),
        ("divide-x divide-x-2", "divide-x-2"),
        ("divide-x divide-y", "divide-x divide-y"),
        ("divide-x divide-red-500", "divide-x divide-red-500"),
        ("outline outline-none", "outline outline-none"),
        ("outline-black outline-1", "outline-black outline-1"),
        ("outline-2 outline-4", "outline-4"),
    ]);
}

#[test]
fn test_colors_and_values() {
    check(&[
        ("bg-grey-5 bg-hotpink", "bg-hotpink"),
        ("hover:bg-grey-5 hover:bg-hotpink", "hover:bg-hotpink"),
        ("text-3.5xl text-black", "text-3.5xl text-black"),
        ("text-red-500 text-lg", "text-red-500 text-lg"),
        ("text-left text-red-500", "text-left text-red-500"),
        ("stroke-black stroke-1", "stroke-black stroke-1"),
        ("bg-red-500 bg-center", "bg-red-500 bg-center"),
        ("bg-red-500 bg-linear-to-r", "bg-red-500 bg-linear-to-r"),
        ("bg-linear-to-r bg-radial-[something] bg-conic-10", "bg-conic-10"),
        ("from-0% from-red", "from-0% from-red"),
        ("from-10% from-50%", "from-50%"),
        ("from-red-500 via-white to-blue-500", "from-red-500 via-white to-blue-500"),
        ("bg-red-500/50 bg-red-500/75", "bg-red-500/75"),
        ("bg-red-500 bg-red-500/50", "bg-red-500/50"),
        ("bg-red-500/[0.5] bg-red-500/[0.75]", "bg-red-500/[0.75]"),
        ("ring-red-500/50 ring-blue-500/50", "ring-blue-500/50"),
        ("accent-auto accent-pink-300", "accent-pink-300"),
        ("fill-none fill-current", "fill-current"),
        ("decoration-wavy decoration-red-500", "decoration-wavy decoration-red-500"),
        ("shadow-lg shadow-red-500", "shadow-lg shadow-red-500"),
    ]);
}

#[test]
fn test_typography() {
    check(&[
        ("font-bold font-thin", "font-thin"),
        ("font-bold font-sans", "font-bold font-sans"),
        ("font-stretch-normal font-sans", "font-stretch-normal font-sans"),
        ("italic not-italic", "not-italic"),
        ("truncate text-ellipsis", "text-ellipsis"),
        ("underline line-through", "line-through"),
        ("line-through no-underline", "no-underline"),
        ("text-lg/7 text-lg/8", "text-lg/8"),
        ("text-lg/none leading-9", "text-lg/none leading-9"),
        ("leading-9 text-lg/none", "text-lg/none"),
        ("text-red text-lg/7 text-lg/8", "text-red text-lg/8"),
        ("text-wrap text-pretty", "text-pretty"),
        ("whitespace-nowrap whitespace-break-spaces", "whitespace-break-spaces"),
        ("break-normal break-words", "break-words"),
        ("break-words break-after-page", "break-words break-after-page"),
        ("wrap-break-word wrap-normal wrap-anywhere", "wrap-anywhere"),
        ("text-shadow-none text-shadow-2xl", "text-shadow-2xl"),
        ("hyphens-auto hyphens-manual", "hyphens-manual"),
        ("line-clamp-2 line-clamp-none line-clamp-[10]", "line-clamp-[10]"),
    ]);
}

#[test]
fn test_layout_and_sizing() {
    check(&[
        ("inline block", "block"),
        ("hover:block hover:block", "hover:block"),
        ("w-full w-1/2", "w-1/2"),
        ("h-10 h-min", "h-min"),
        ("h-svh h-dvh w-svw w-dvw", "h-dvh w-dvw"),
        ("h-12 h-lh", "h-lh"),
        ("min-w-0 min-w-50 min-w-px max-w-0 max-w-50 max-w-px", "min-w-px max-w-px"),
        ("float-start float-end clear-start clear-end", "float-end clear-end"),
        ("aspect-video aspect-[4/3]", "aspect-[4/3]"),
        ("aspect-video w-full", "aspect-video w-full"),
        ("columns-auto columns-3xl", "columns-3xl"),
        ("flex-1 flex-row", "flex-1 flex-row"),
        ("basis-4 flex-1", "flex-1"),
        ("grow flex-auto", "flex-auto"),
        ("shrink-0 flex-none", "flex-none"),
        ("items-center-safe items-baseline items-end-safe", "items-end-safe"),
        ("self-baseline self-baseline-last", "self-baseline-last"),
        ("justify-normal justify-center justify-stretch", "justify-stretch"),
        ("place-content-center place-items-start", "place-content-center place-items-start"),
        ("container container", "container"),
        ("visible invisible", "invisible"),
        ("sr-only not-sr-only", "not-sr-only"),
    ]);
}

#[test]
fn test_effects_and_transforms() {
    check(&[
        ("mix-blend-normal mix-blend-multiply", "mix-blend-multiply"),
        ("blur-sm blur-lg", "blur-lg"),
        ("blur-sm brightness-50 contrast-100", "blur-sm brightness-50 contrast-100"),
        ("backdrop-blur-sm backdrop-blur-lg", "backdrop-blur-lg"),
        ("drop-shadow-2xl drop-shadow-[shadow:foo]", "drop-shadow-[shadow:foo]"),
        ("drop-shadow-lg drop-shadow-red-500", "drop-shadow-lg drop-shadow-red-500"),
        ("inset-ring-2 inset-0", "inset-ring-2 inset-0"),
        ("inset-shadow-sm inset-0", "inset-shadow-sm inset-0"),
        ("translate-x-4 translate-4", "translate-4"),
        ("translate-x-4 translate-y-8", "translate-x-4 translate-y-8"),
        ("translate-x-4 translate-none", "translate-none"),
        ("rotate-x-45 rotate-y-90", "rotate-x-45 rotate-y-90"),
        ("scale-x-50 scale-y-75", "scale-x-50 scale-y-75"),
        ("-scale-x-50 -scale-x-100", "-scale-x-100"),
        ("translate-x-2 -translate-x-4", "-translate-x-4"),
        ("transform-3d transform-flat", "transform-flat"),
        ("transform-3d transform-gpu", "transform-3d transform-gpu"),
        ("transition-all transition-discrete", "transition-all transition-discrete"),
        ("delay-150 delay-0 duration-150 duration-0", "delay-0 duration-0"),
        ("ease-linear ease-in-out", "ease-in-out"),
        ("animate-bounce animate-none", "animate-none"),
    ]);
}

#[test]
fn test_masks() {
    check(&[
        ("mask-add mask-subtract", "mask-subtract"),
        ("mask-type-luminance mask-type-alpha", "mask-type-alpha"),
        ("mask-clip-content mask-no-clip", "mask-no-clip"),
        ("mask-linear-from-0% mask-linear-from-50%", "mask-linear-from-50%"),
        ("mask-linear-from-50% mask-linear-from-red-500", "mask-linear-from-50% mask-linear-from-red-500"),
        ("mask-t-from-red-500 mask-t-from-blue-500", "mask-t-from-blue-500"),
        ("mask-radial mask-radial-[circle]", "mask-radial-[circle]"),
        ("mask-radial-closest-side mask-radial-farthest-corner", "mask-radial-farthest-corner"),
        ("mask-radial-circle mask-radial-closest-side", "mask-radial-circle mask-radial-closest-side"),
        ("mask-radial-at-center mask-radial-at-top", "mask-radial-at-top"),
        ("mask-conic-45 mask-conic-90", "mask-conic-90"),
        ("mask-center mask-cover", "mask-center mask-cover"),
        ("mask-repeat-x mask-repeat-y", "mask-repeat-y"),
        ("mask-none mask-[url('...')]", "mask-[url('...')]"),
    ]);
}

#[test]
fn test_modifiers() {
    check(&[
        ("hover:block hover:inline", "hover:inline"),
        ("hover:block hover:focus:inline", "hover:block hover:focus:inline"),
        ("focus-within:inline focus-within:block", "focus-within:block"),
        ("c:d:e:block d:c:e:inline", "d:c:e:inline"),
        ("*:before:block *:before:inline", "*:before:inline"),
        ("*:before:block before:*:inline", "*:before:block before:*:inline"),
        ("x:y:*:z:block y:x:*:z:inline", "y:x:*:z:inline"),
        ("*:p-10 *:p-20 hover:*:p-10 hover:*:p-20", "*:p-20 hover:*:p-20"),
        ("hover:focus:-right-1 focus:hover:inset-x-1", "focus:hover:inset-x-1"),
        ("empty:p-2 empty:p-3", "empty:p-3"),
        ("group-empty:p-2 peer-empty:p-3", "group-empty:p-2 peer-empty:p-3"),
        ("hover:group-empty:p-2 hover:group-empty:p-3", "hover:group-empty:p-3"),
        ("before:hover:text-red-500 hover:before:text-blue-500", "before:hover:text-red-500 hover:before:text-blue-500"),
        ("*:hover:text-red-500 hover:*:text-blue-500", "*:hover:text-red-500 hover:*:text-blue-500"),
        ("[&>*]:hover:text-red-500 hover:[&>*]:text-blue-500", "[&>*]:hover:text-red-500 hover:[&>*]:text-blue-500"),
        ("before:hover:focus:text-red-500 before:focus:hover:text-blue-500", "before:focus:hover:text-blue-500"),
        ("*:text-red-500 **:text-blue-500", "*:text-red-500 **:text-blue-500"),
        ("group-hover/sidebar:text-red-500 group-hover/sidebar:text-blue-500", "group-hover/sidebar:text-blue-500"),
        (
            "group-hover/sidebar:text-red-500 group-hover/nav:text-blue-500",
            "group-hover/sidebar:text-red-500 group-hover/nav:text-blue-500",
        ),
        ("hover:dark:text-red-500 dark:hover:text-blue-500", "dark:hover:text-blue-500"),
        ("@sm:p-2 @md:p-4", "@sm:p-2 @md:p-4"),
        ("@container/main:p-2 @container/main:p-4", "@container/main:p-4"),
    ]);
}

#[test]
fn test_negative_values() {
    check(&[
        ("-m-2 -m-5", "-m-5"),
        ("-top-12 -top-2000", "-top-2000"),
        ("-m-2 m-auto", "m-auto"),
        ("top-12 -top-69", "-top-69"),
        ("-right-1 inset-x-1", "inset-x-1"),
        ("-space-x-4 space-x-8", "space-x-8"),
    ]);
}

#[test]
fn test_important_marker_positions() {
    check(&[
        ("font-medium! font-bold!", "font-bold!"),
        ("right-2! -inset-x-px!", "-inset-x-px!"),
        ("focus:inline! focus:block!", "focus:block!"),
        ("[--my-var:20px]! [--my-var:30px]!", "[--my-var:30px]!"),
        ("font-medium! !font-bold", "!font-bold"),
        ("!font-medium !font-bold", "!font-bold"),
        ("!right-2 !-inset-x-px", "!-inset-x-px"),
        ("focus:!inline focus:!block", "focus:!block"),
        ("![--my-var:20px] ![--my-var:30px]", "![--my-var:30px]"),
        ("hover:!text-red-500 hover:!text-blue-500", "hover:!text-blue-500"),
        ("!p-2 !m-4", "!p-2 !m-4"),
    ]);
}

#[test]
fn test_non_tailwind_classes() {
    check(&[
        ("non-tailwind-class inline block", "non-tailwind-class block"),
        ("inline block inline-1", "block inline-1"),
        ("inline block i-inline", "block i-inline"),
        ("focus:inline focus:block focus:inline-1", "focus:block focus:inline-1"),
        ("custom p-2 p-4 another", "custom p-4 another"),
        ("my-component bg-red-500 bg-blue-500", "my-component bg-blue-500"),
        ("foo bar baz", "foo bar baz"),
    ]);
}

#[test]
fn test_whitespace_handling() {
    check(&[
        ("", ""),
        (" block", "block"),
        ("block ", "block"),
        (" block px-2    py-4 ", "block px-2 py-4"),
        ("block\npx-2", "block px-2"),
        ("\nblock\npx-2\n", "block px-2"),
        (" block\n \n px-2 \n py-4 ", "block px-2 py-4"),
        ("  bg-red-500   bg-blue-500  ", "bg-blue-500"),
    ]);
}
